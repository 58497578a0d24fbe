//! Entity models
//!
//! One module per table. Each entity comes with its create payload
//! (`XxxCreate`); no update/delete payloads exist because the system
//! never mutates rows after insert.

pub mod category;
pub mod client;
pub mod order;
pub mod product;
pub mod reservation;

pub use category::{Category, CategoryCreate};
pub use client::{Client, ClientCreate};
pub use order::{
    Order, OrderCreate, OrderLine, OrderLineInput, OrderStatus, PaymentMethod, UnknownVariant,
};
pub use product::{Product, ProductCreate, ProductSummary};
pub use reservation::{Reservation, ReservationCreate, ReservationStatus};
