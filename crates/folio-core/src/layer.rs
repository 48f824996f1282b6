//! Stacking order of the shell.

/// A visual layer of the shell, bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// Decorative background, behind everything.
    Background,
    /// Navigation bar.
    Chrome,
    /// The page content region.
    Content,
    /// The open side panel and its backdrop, above the page it covers.
    Overlay,
}

impl Layer {
    /// All layers in paint order.
    pub const STACK: [Layer; 4] = [
        Layer::Background,
        Layer::Chrome,
        Layer::Content,
        Layer::Overlay,
    ];

    pub fn z_index(self) -> i32 {
        match self {
            Self::Background => -50,
            Self::Chrome => 10,
            Self::Content => 20,
            Self::Overlay => 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_strictly_increasing() {
        for pair in Layer::STACK.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].z_index() < pair[1].z_index());
        }
    }
}
