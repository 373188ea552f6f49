pub mod ascvd;
pub mod findrisk;
pub mod frax;
pub mod gad7;
pub mod hcri;
pub mod odi;
pub mod start_back;
