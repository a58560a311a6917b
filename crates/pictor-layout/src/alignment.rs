use pictor_core::{Point, Size};
use serde::{Deserialize, Serialize};

/// How a Row or Column distributes leftover main-axis space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MainAxisAlignment {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Whether a Row or Column hugs its children or takes the whole parent extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MainAxisSize {
    /// Sum of the children's main-axis sizes.
    #[default]
    Min,
    /// The parent's main-axis extent, whatever the children need.
    Max,
}

/// Nine-way anchor used by `Align`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    #[serde(alias = "leftCenter")]
    CenterLeft,
    Center,
    #[serde(alias = "rightCenter")]
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Top-left position of a `child` box anchored inside `parent`.
    ///
    /// Centered axes use truncating division, so odd leftovers favour the
    /// start edge.
    pub fn offset(self, parent: Size, child: Size) -> Point {
        let free_x = parent.width - child.width;
        let free_y = parent.height - child.height;
        let (x, y) = match self {
            Anchor::TopLeft => (0, 0),
            Anchor::TopCenter => (free_x / 2, 0),
            Anchor::TopRight => (free_x, 0),
            Anchor::CenterLeft => (0, free_y / 2),
            Anchor::Center => (free_x / 2, free_y / 2),
            Anchor::CenterRight => (free_x, free_y / 2),
            Anchor::BottomLeft => (0, free_y),
            Anchor::BottomCenter => (free_x / 2, free_y),
            Anchor::BottomRight => (free_x, free_y),
        };
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_table() {
        let parent = Size::new(200, 100);
        let child = Size::new(50, 21);
        let cases = [
            (Anchor::TopLeft, (0, 0)),
            (Anchor::TopCenter, (75, 0)),
            (Anchor::TopRight, (150, 0)),
            (Anchor::CenterLeft, (0, 39)),
            (Anchor::Center, (75, 39)),
            (Anchor::CenterRight, (150, 39)),
            (Anchor::BottomLeft, (0, 79)),
            (Anchor::BottomCenter, (75, 79)),
            (Anchor::BottomRight, (150, 79)),
        ];
        for (anchor, (x, y)) in cases {
            assert_eq!(anchor.offset(parent, child), Point::new(x, y), "{anchor:?}");
        }
    }

    #[test]
    fn test_anchor_with_oversized_child() {
        let offset = Anchor::BottomRight.offset(Size::new(10, 10), Size::new(15, 12));
        assert_eq!(offset, Point::new(-5, -2));
    }
}
