pub mod add_cart_item;
