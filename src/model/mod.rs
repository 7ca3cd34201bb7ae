//! Plain data: the menu, the cart and placed orders.
//!
//! [`Cart`] and [`Order`] are the stateful resources managed by actors; [`MenuItem`] is
//! read-only catalog data.

pub mod cart;
pub mod menu;
pub mod order;

pub use cart::*;
pub use menu::*;
pub use order::*;
