/// Sets a line's quantity outright. Zero or below removes the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCartItemQuantity {
    pub item_id: String,
    pub quantity: i64,
}
