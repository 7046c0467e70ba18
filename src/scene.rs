//! Background grid scene
//!
//! Geometry only: a flat square grid plus a handful of glowing nodes floating
//! above it. Drawing it is left to whatever front end consumes the data.

use crate::config::SceneConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Horizontal spread of the floating nodes
const NODE_SPREAD: f32 = 20.0;
/// Maximum height of the floating nodes
const NODE_HEIGHT: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    pub from: Vec3,
    pub to: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Cyan,
    Purple,
    Green,
}

impl NodeColor {
    pub const PALETTE: [NodeColor; 3] = [NodeColor::Cyan, NodeColor::Purple, NodeColor::Green];

    pub fn hex(&self) -> &'static str {
        match self {
            NodeColor::Cyan => "#00ffff",
            NodeColor::Purple => "#9d00ff",
            NodeColor::Green => "#00ff41",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatingNode {
    pub id: usize,
    pub position: Vec3,
    pub color: NodeColor,
    /// Bobbing speed in [1, 3)
    pub float_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridScene {
    pub lines: Vec<GridLine>,
    pub nodes: Vec<FloatingNode>,
}

impl GridScene {
    /// Build a scene, drawing node placement from `rng`
    pub fn generate<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let size = config.grid_size;
        let extent = size as f32;
        let step = config.grid_step.max(1) as usize;

        let mut lines = Vec::new();
        for i in (-size..=size).step_by(step) {
            let offset = i as f32;
            lines.push(GridLine {
                from: Vec3::new(-extent, 0.0, offset),
                to: Vec3::new(extent, 0.0, offset),
            });
            lines.push(GridLine {
                from: Vec3::new(offset, 0.0, -extent),
                to: Vec3::new(offset, 0.0, extent),
            });
        }

        let nodes = (0..config.node_count)
            .map(|id| FloatingNode {
                id,
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * NODE_SPREAD,
                    rng.gen::<f32>() * NODE_HEIGHT,
                    (rng.gen::<f32>() - 0.5) * NODE_SPREAD,
                ),
                color: NodeColor::PALETTE[rng.gen_range(0..NodeColor::PALETTE.len())],
                float_speed: rng.gen_range(1.0..3.0),
            })
            .collect();

        Self { lines, nodes }
    }

    /// Build a scene using the configured seed, or entropy when unset
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = Self::generate(config, &mut rng);
        debug!(
            "Generated scene with {} grid lines and {} nodes",
            scene.lines.len(),
            scene.nodes.len()
        );
        scene
    }
}
