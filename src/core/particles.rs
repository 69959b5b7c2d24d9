// Declarative configuration for the external particle engine. Field names
// follow the particles.js parameter schema so the serialized form can be
// handed over unchanged.

use crate::constants::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleConfig {
    pub particles: ParticleSettings,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticleSettings {
    pub number: Number,
    pub color: ColorValue,
    pub shape: Shape,
    pub opacity: RandomValue,
    pub size: RandomValue,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub movement: Movement,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Number {
    pub value: u32,
    pub density: Density,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Density {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorValue {
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: ShapeType,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RandomValue {
    pub value: f32,
    pub random: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineLinked {
    pub enable: bool,
    pub distance: f32,
    pub color: String,
    pub opacity: f32,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveDirection {
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutMode {
    Out,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Movement {
    pub enable: bool,
    pub speed: f32,
    pub direction: MoveDirection,
    pub random: bool,
    pub straight: bool,
    pub out_mode: OutMode,
    pub bounce: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectOn {
    Canvas,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Repulse,
    Push,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventBinding {
    pub enable: bool,
    pub mode: InteractionMode,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Events {
    pub onhover: EventBinding,
    pub onclick: EventBinding,
    pub resize: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Repulse {
    pub distance: f32,
    pub duration: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Push {
    pub particles_nb: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Modes {
    pub repulse: Repulse,
    pub push: Push,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interactivity {
    pub detect_on: DetectOn,
    pub events: Events,
    pub modes: Modes,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particles: ParticleSettings {
                number: Number {
                    value: PARTICLE_COUNT,
                    density: Density {
                        enable: true,
                        value_area: PARTICLE_DENSITY_AREA,
                    },
                },
                color: ColorValue {
                    value: PARTICLE_COLOR.to_string(),
                },
                shape: Shape {
                    kind: ShapeType::Circle,
                },
                opacity: RandomValue {
                    value: PARTICLE_OPACITY,
                    random: false,
                },
                size: RandomValue {
                    value: PARTICLE_SIZE,
                    random: true,
                },
                line_linked: LineLinked {
                    enable: true,
                    distance: LINK_DISTANCE,
                    color: LINK_COLOR.to_string(),
                    opacity: LINK_OPACITY,
                    width: LINK_WIDTH,
                },
                movement: Movement {
                    enable: true,
                    speed: PARTICLE_SPEED,
                    direction: MoveDirection::None,
                    random: false,
                    straight: false,
                    out_mode: OutMode::Out,
                    bounce: false,
                },
            },
            interactivity: Interactivity {
                detect_on: DetectOn::Canvas,
                events: Events {
                    onhover: EventBinding {
                        enable: true,
                        mode: InteractionMode::Repulse,
                    },
                    onclick: EventBinding {
                        enable: true,
                        mode: InteractionMode::Push,
                    },
                    resize: true,
                },
                modes: Modes {
                    repulse: Repulse {
                        distance: REPULSE_DISTANCE,
                        duration: REPULSE_DURATION,
                    },
                    push: Push {
                        particles_nb: PUSH_PARTICLES,
                    },
                },
            },
            retina_detect: true,
        }
    }
}

impl ParticleConfig {
    /// JSON text in the shape `particlesJS(tag_id, params)` expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
