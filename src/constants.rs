// Activity log action names
pub const USER_REGISTERED: &str = "USER_REGISTERED";
pub const LOGIN_SUCCEEDED: &str = "LOGIN_SUCCEEDED";
pub const LOGIN_FAILED: &str = "LOGIN_FAILED";
pub const APPOINTMENT_SCHEDULED: &str = "APPOINTMENT_SCHEDULED";
pub const BLOOD_REQUEST_SUBMITTED: &str = "BLOOD_REQUEST_SUBMITTED";
pub const USER_UPDATED: &str = "USER_UPDATED";
pub const USER_DELETED: &str = "USER_DELETED";

// Response messages the web client keys off
pub const MSG_REGISTER_MISSING_FIELDS: &str = "All fields are required";
pub const MSG_LOGIN_MISSING_FIELDS: &str = "Email and password are required";
pub const MSG_SCHEDULE_MISSING_FIELDS: &str = "Please fill in all required fields";
pub const MSG_REQUEST_MISSING_FIELDS: &str = "Blood type, quantity, urgency, reason and hospital are required";
pub const MSG_USER_REGISTERED: &str = "User registered successfully";
pub const MSG_REQUEST_SUBMITTED: &str = "Blood request submitted successfully";

/// Inventory at or below this many units is reported as low.
pub const LOW_INVENTORY_UNITS: u32 = 5;
