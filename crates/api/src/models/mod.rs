//! Domain models backing the mobile API.

pub mod customer;
pub mod enquiry;
pub mod notification;
pub mod order;
pub mod preference;
pub mod product;
pub mod service;

pub use customer::{Customer, CustomerSummary, ProfileUpdate, RegistrationRequest};
pub use enquiry::{Enquiry, NewEnquiry};
pub use notification::Notification;
pub use order::{Sale, SaleItem};
pub use preference::{PreferenceRecord, PreferencesUpdate, ValidationError};
pub use product::{GalleryImage, OwnedProduct, Product, ProductCategory, ProductImage};
pub use service::{ServiceCenter, ServiceRequest, ServiceTicket};
