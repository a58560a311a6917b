//! Row and Column: single-pass, non-flexing linear layout.
//!
//! Both containers measure every child against the full parent size, add
//! up the main-axis extents and distribute whatever is left over according
//! to a [`MainAxisAlignment`]. The leftover may be negative, in which case
//! children overlap; nothing is clamped.

use pictor_core::{Canvas, Result, Size};

use crate::alignment::{MainAxisAlignment, MainAxisSize};
use crate::cache::SizeCache;
use crate::render_object::{BoxedRenderObject, RenderObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn main(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    fn cross(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    fn size(self, main: i32, cross: i32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }
}

/// Main-axis start offset of each child, given the children's main-axis
/// sizes and the container's main-axis extent.
///
/// All gaps use truncating division; the remainder is not redistributed.
pub(crate) fn main_axis_offsets(
    alignment: MainAxisAlignment,
    sizes: &[i32],
    extent: i32,
) -> Vec<i32> {
    let n = sizes.len() as i32;
    if n == 0 {
        return Vec::new();
    }
    let used: i32 = sizes.iter().sum();
    let available = extent - used;

    let (leading, gap) = match alignment {
        MainAxisAlignment::Start => (0, 0),
        MainAxisAlignment::End => (available, 0),
        MainAxisAlignment::Center => (available / 2, 0),
        MainAxisAlignment::SpaceBetween if n == 1 => (available / 2, 0),
        MainAxisAlignment::SpaceBetween => (0, available / (n - 1)),
        MainAxisAlignment::SpaceAround => {
            let gap = available / n;
            (gap / 2, gap)
        }
        MainAxisAlignment::SpaceEvenly => {
            let gap = available / (n + 1);
            (gap, gap)
        }
    };

    let mut offsets = Vec::with_capacity(sizes.len());
    let mut cursor = leading;
    for &size in sizes {
        offsets.push(cursor);
        cursor += size + gap;
    }
    offsets
}

#[derive(Debug)]
struct Flex {
    axis: Axis,
    children: Vec<BoxedRenderObject>,
    alignment: MainAxisAlignment,
    sizing: MainAxisSize,
    cache: SizeCache,
}

impl Flex {
    fn new(axis: Axis, children: Vec<BoxedRenderObject>) -> Self {
        Self {
            axis,
            children,
            alignment: MainAxisAlignment::default(),
            sizing: MainAxisSize::default(),
            cache: SizeCache::new(),
        }
    }

    fn size(&self, parent_size: Size) -> Size {
        self.cache.get_or_compute(parent_size, || {
            let mut main = 0;
            let mut cross = 0;
            for child in &self.children {
                let child_size = child.size(parent_size);
                main += self.axis.main(child_size);
                cross = cross.max(self.axis.cross(child_size));
            }
            if self.sizing == MainAxisSize::Max {
                main = self.axis.main(parent_size);
            }
            self.axis.size(main, cross)
        })
    }

    fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
        if self.children.is_empty() {
            return Ok(());
        }
        let canvas_size = canvas.size();
        let child_sizes: Vec<Size> = self.children.iter().map(|c| c.size(canvas_size)).collect();
        let mains: Vec<i32> = child_sizes.iter().map(|&s| self.axis.main(s)).collect();
        let extent = self.axis.main(canvas_size);

        let used: i32 = mains.iter().sum();
        if used > extent {
            log::debug!(
                "{:?} children need {} px on the main axis but only {} are available",
                self.axis,
                used,
                extent
            );
        }

        let offsets = main_axis_offsets(self.alignment, &mains, extent);
        let placements = child_sizes.iter().zip(&offsets);
        for (child, (&child_size, &offset)) in self.children.iter().zip(placements) {
            let (x, y) = match self.axis {
                Axis::Horizontal => (offset, 0),
                Axis::Vertical => (0, offset),
            };
            let mut child_canvas = canvas.sub_view(x, y, child_size, None);
            child.paint(&mut child_canvas)?;
        }
        Ok(())
    }
}

macro_rules! flex_container {
    ($(#[$meta:meta])* $name:ident, $axis:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(Flex);

        impl $name {
            pub fn new(children: Vec<BoxedRenderObject>) -> Self {
                Self(Flex::new($axis, children))
            }

            pub fn with_alignment(mut self, alignment: MainAxisAlignment) -> Self {
                self.0.alignment = alignment;
                self.0.cache.clear();
                self
            }

            pub fn with_sizing(mut self, sizing: MainAxisSize) -> Self {
                self.0.sizing = sizing;
                self.0.cache.clear();
                self
            }

            pub fn alignment(&self) -> MainAxisAlignment {
                self.0.alignment
            }

            pub fn sizing(&self) -> MainAxisSize {
                self.0.sizing
            }

            pub fn children(&self) -> &[BoxedRenderObject] {
                &self.0.children
            }
        }

        impl RenderObject for $name {
            fn size(&self, parent_size: Size) -> Size {
                self.0.size(parent_size)
            }

            fn paint(&self, canvas: &mut Canvas<'_>) -> Result<()> {
                self.0.paint(canvas)
            }
        }
    };
}

flex_container!(
    /// Lays its children out left to right.
    Row,
    Axis::Horizontal
);

flex_container!(
    /// Lays its children out top to bottom.
    Column,
    Axis::Vertical
);
