mod home;
pub use home::Home;

mod products;
pub use products::Products;

mod product_detail;
pub use product_detail::ProductDetail;

mod login;
pub use login::Login;

mod cart;
pub use cart::Cart;

mod checkout;
pub use checkout::Checkout;

mod orders;
pub use orders::Orders;

mod admin;
pub use admin::Admin;
