pub mod audit;
pub mod blood_type;
pub mod directory;
pub mod records;
pub mod user;

pub use audit::AppLog;
pub use blood_type::BloodType;
pub use directory::{BloodBank, DonorListing, InventoryStatus};
pub use records::{
    Appointment, AppointmentStatus, BloodRequest, DonationRecord, DonationStatus, Notification, NotificationKind,
    RequestStatus, Urgency,
};
pub use user::{NewUser, Role, User, UserProfile, UserUpdate};
