// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_geometry::{BoundingBox, PathGeometry, PathTransform, Vector2Ext};
use kurbo::Point;

use super::Paint;
use crate::style::alpha;
use crate::surface::Surface;
use crate::types::AbsoluteTransform;

/// A free-form path placed by the node's absolute transform.
///
/// Scale and rotation pivot on the path centroid.
#[derive(Clone, Debug, Default)]
pub struct PathShape {
    geometry: PathGeometry,
}

fn path_transform(abs: &AbsoluteTransform) -> PathTransform {
    PathTransform {
        position: abs.position(),
        rotation: abs.rotation(),
        scale: abs.scale(),
    }
}

impl PathShape {
    pub(crate) fn new(geometry: PathGeometry) -> Self {
        Self { geometry }
    }

    /// Authored geometry.
    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    pub(crate) fn geometry_mut(&mut self) -> &mut PathGeometry {
        &mut self.geometry
    }

    /// World-space simplified commands for the given placement.
    pub fn calculated_commands(&mut self, abs: &AbsoluteTransform) -> &[arbor_geometry::PathCommand] {
        self.geometry.calculated_commands(&path_transform(abs))
    }

    /// Centroid in authored coordinates.
    pub fn centroid(&mut self) -> Point {
        self.geometry.centroid()
    }

    pub(crate) fn bounding_box(&mut self, abs: &AbsoluteTransform) -> Option<BoundingBox> {
        self.geometry.bounding_box(&path_transform(abs))
    }

    pub(crate) fn hit_test(
        &mut self,
        pt: Point,
        abs: &AbsoluteTransform,
        line_width: f64,
        tolerance: f64,
    ) -> bool {
        self.geometry
            .hit_test(pt, &path_transform(abs), line_width, tolerance)
    }

    pub(crate) fn draw(&mut self, surface: &mut dyn Surface, abs: &AbsoluteTransform, paint: Paint) {
        let width = paint.line_width * abs.scale().min_component();
        let commands = self.geometry.calculated_commands(&path_transform(abs));
        if commands.is_empty() {
            return;
        }
        if alpha(paint.fill) > 0.0 {
            surface.fill_path(commands, paint.fill);
        }
        if paint.line_width > 0.0 {
            surface.stroke_path(commands, paint.stroke, width);
        }
    }
}
