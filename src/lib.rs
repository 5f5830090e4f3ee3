pub mod simulation;
pub mod configuration;
pub mod view;
pub mod visualization;
pub mod error;

pub use simulation::states::{Body, System, NVec2, Rgb};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{symplectic_euler, verlet_integrator};
pub use simulation::clock::SimulationClock;
pub use simulation::timeline::{Effect, TimelineRule, TimelineScript, Trigger};
pub use simulation::command::Command;
pub use simulation::scenario::Scenario;

pub use view::transform::{ViewState, ViewTransform};
pub use view::trail::TrailBuffer;
pub use view::frame::{AudioCue, BodyFrame, FrameDescriptor};

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use error::{SimError, SimResult};

pub use visualization::{vis2d::run_2d, headless::run_headless};
