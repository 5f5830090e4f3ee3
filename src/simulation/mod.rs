pub mod states;
pub mod vecmath;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod clock;
pub mod timeline;
pub mod command;
pub mod scenario;
