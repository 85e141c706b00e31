use shophub_commerce::account::Wishlist;

use super::Block;
use crate::views::ProductCardView;

pub(super) fn blocks(wishlist: &Wishlist) -> Vec<Block> {
    if wishlist.is_empty() {
        return vec![Block::empty(
            "Your wishlist is empty",
            "Save items you love to find them later.",
        )];
    }
    wishlist
        .items()
        .iter()
        .map(|product| Block::Product(ProductCardView::wishlist(product)))
        .collect()
}
