use crate::canvas::Rgba;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const WINDOW_TITLE: &str = "Speaker Market Presentation";
pub const DEFAULT_SECONDS_PER_SLIDE: f32 = 3.0; // Time each slide stays on screen when exporting

// Palette
pub const WHITE: Rgba = Rgba::hex(0xFFFFFF);
pub const INDIGO_600: Rgba = Rgba::hex(0x4F46E5);
pub const INDIGO_500: Rgba = Rgba::hex(0x6366F1);
pub const GRAY_800: Rgba = Rgba::hex(0x1F2937);
pub const GRAY_600: Rgba = Rgba::hex(0x4B5563);
pub const GRAY_200: Rgba = Rgba::hex(0xE5E7EB);
pub const GRAY_100: Rgba = Rgba::hex(0xF3F4F6);
pub const DISABLED_ALPHA: u8 = 0x80;

pub const CHART_PALETTE: [Rgba; 4] = [
    Rgba::hex(0x4C51BF),
    Rgba::hex(0x48BB78),
    Rgba::hex(0xF6AD55),
    Rgba::hex(0xF56565),
];
pub const BAR_COLOR: Rgba = Rgba::hex(0x4C51BF);

// Type scale, in framebuffer pixels
pub const TITLE_SIZE: f32 = 96.0;
pub const SUBTITLE_SIZE: f32 = 48.0;
pub const HEADING_SIZE: f32 = 60.0;
pub const BODY_SIZE: f32 = 40.0;
pub const LABEL_SIZE: f32 = 32.0;
pub const SMALL_SIZE: f32 = 28.0;

// Spacing
pub const PADDING: f32 = 96.0;               // Slide padding on every side
pub const HEADING_GAP: f32 = 64.0;           // Space between a heading and its body
pub const LIST_GAP: f32 = 48.0;              // Space between list items
pub const BULLET_RADIUS: f32 = 16.0;
pub const TITLE_ICON_SIZE: f32 = 96.0;
pub const MARKER_ICON_SIZE: f32 = 48.0;

// Charts
pub const PIE_INNER_RADIUS: f32 = 120.0;
pub const PIE_OUTER_RADIUS: f32 = 240.0;
pub const PIE_PADDING_ANGLE: f32 = 5.0;      // Degrees left empty between pie segments
pub const CHART_HEIGHT: f32 = 560.0;
pub const AXIS_TICKS: usize = 5;

// Icons are authored on a 24x24 grid, stroked at width 2
pub const ICON_GRID: f32 = 24.0;
pub const ICON_STROKE: f32 = 2.0;

// Navigation bar
pub const NAV_BUTTON_SIZE: f32 = 80.0;
pub const NAV_ICON_SIZE: f32 = 48.0;
pub const NAV_GAP: f32 = 32.0;
pub const NAV_INDICATOR_WIDTH: f32 = 120.0;
pub const NAV_BOTTOM_MARGIN: f32 = 32.0;
