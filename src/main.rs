// Copyright 2025 contributors to the GeoPlegmata project.
//
// Licenced under the Apache Licence, Version 2.0 <LICENCE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENCE-MIT or http://opensource.org/licenses/MIT>, at your
// discretion. This file may not be copied, modified, or distributed
// except according to those terms

use dggs::{DggrsKind, WgsPoint};

fn main() {
    let point = WgsPoint::new(1.234, 2.345, 3.879).expect("valid WGS84 point");

    for kind in [DggrsKind::Isea4t, DggrsKind::Isea3h] {
        let cell = dggs::point_to_cell(&point, kind).expect("point indexes to a cell");
        println!("{kind:?} cell for {point}: {cell}");

        let centre = dggs::cell_to_point(&cell).expect("cell has a centre point");
        println!("  centre: {centre}");

        let children = dggs::children(&cell).expect("cell has children");
        println!("  {} children", children.len());
    }
}
