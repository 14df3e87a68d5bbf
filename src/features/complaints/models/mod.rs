mod complaint;

pub use complaint::{Complaint, NewComplaint};
