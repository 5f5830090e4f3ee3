pub mod transform;
pub mod trail;
pub mod frame;
