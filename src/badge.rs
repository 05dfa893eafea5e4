/// Cart badge projection

use crate::cart::Cart;

/// What every cart badge on the page should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeView {
    pub total: u64,
}

impl BadgeView {
    pub fn from_cart(cart: &Cart) -> Self {
        BadgeView {
            total: cart.total_quantity(),
        }
    }

    pub fn text(&self) -> String {
        self.total.to_string()
    }

    pub fn is_visible(&self) -> bool {
        self.total > 0
    }

    /// CSS `display` value for the badge element
    pub fn display(&self) -> &'static str {
        if self.is_visible() { "flex" } else { "none" }
    }
}

/// Something that can project a [`BadgeView`] onto the page.
pub trait BadgeRenderer {
    fn render(&self, view: BadgeView);
}
