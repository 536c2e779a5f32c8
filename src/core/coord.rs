/// Orthonormal shading frame with the surface normal mapped to local +z.
#[derive(Copy, Clone)]
pub struct Coordinate {
    local_to_world: glam::Mat3A,
    world_to_local: glam::Mat3A,
}

impl Coordinate {
    pub fn from_normal(n: glam::Vec3A) -> Self {
        let z_world = n.normalize();

        // helper axis, never near-parallel to the normal
        let mut helper = z_world;
        if helper.x.abs() <= helper.y.abs() && helper.x.abs() <= helper.z.abs() {
            helper.x = 1.0;
        } else if helper.y.abs() <= helper.x.abs() && helper.y.abs() <= helper.z.abs() {
            helper.y = 1.0;
        } else {
            helper.z = 1.0;
        }

        let y_world = helper.cross(z_world).normalize();
        let x_world = z_world.cross(y_world).normalize();

        let local_to_world = glam::Mat3A::from_cols(x_world, y_world, z_world);
        let world_to_local = local_to_world.transpose();
        Self {
            local_to_world,
            world_to_local,
        }
    }

    pub fn to_local(&self, world: glam::Vec3A) -> glam::Vec3A {
        self.world_to_local * world
    }

    pub fn to_world(&self, local: glam::Vec3A) -> glam::Vec3A {
        self.local_to_world * local
    }
}
