use glam::DVec3;
use std::fmt;

pub type Color = [f64; 3];

/// Shading parameters carried by an `mtlcolor` directive. Applies to every
/// object that follows it in the scene file.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub ka: f64,
    pub kd: f64,
    pub ks: f64,
    pub shininess: u32,
    pub opacity: f64,
    pub ior: f64,
}

impl Material {
    /// Shading shared by every cylinder of the ring; only the diffuse color varies
    pub const RING: Material = Material {
        diffuse: [1.0, 1.0, 1.0],
        specular: [1.0, 1.0, 1.0],
        ka: 0.3,
        kd: 0.5,
        ks: 0.2,
        shininess: 30,
        opacity: 1.0,
        ior: 1.7,
    };

    pub const fn with_diffuse(self, diffuse: Color) -> Self {
        Self { diffuse, ..self }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.diffuse;
        let [sr, sg, sb] = self.specular;
        write!(
            f,
            "mtlcolor  {:.2} {:.2} {:.2}  {} {} {}  {} {} {} {} {} {}",
            r, g, b, sr, sg, sb, self.ka, self.kd, self.ks, self.shininess, self.opacity, self.ior
        )
    }
}

/// Cylinder primitive: base center, axis direction, radius and length
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
    pub center: DVec3,
    pub axis: DVec3,
    pub radius: f64,
    pub length: f64,
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // x, y and radius are rounded, the remaining fields are written as-is
        write!(
            f,
            "cylinder  {:.2} {:.2} {}  {} {} {} {:.2} {}",
            self.center.x,
            self.center.y,
            self.center.z,
            self.axis.x,
            self.axis.y,
            self.axis.z,
            self.radius,
            self.length
        )
    }
}

/// One material + geometry pair, written as two consecutive lines
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneRecord {
    pub material: Material,
    pub cylinder: Cylinder,
}

impl fmt::Display for SceneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.material)?;
        writeln!(f, "{}", self.cylinder)
    }
}
