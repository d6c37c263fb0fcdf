#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavAction {
    Previous, // Step back one slide
    Next,     // Step forward one slide
}
