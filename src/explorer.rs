//! This module holds the state of an exploring session: the color in the middle of the screen, the
//! six inputs that move it around, and the grid of neighbors drawn around it. It knows nothing about
//! keys, windows, or terminals. A front-end turns whatever it reads into a set of held
//! [`Trigger`]s each tick, runs them through an [`EdgeDetector`], and hands the result to
//! [`Explorer::handle_input`].

use std::collections::HashSet;

use crate::color::RGBColor;
use crate::colors::{NCSColor, NCSFormatError};

/// One of the three directions a color can be moved in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Darker or lighter.
    Blackness,
    /// More or less colorful.
    Chromaticness,
    /// Around the hue circle.
    Hue,
}

/// A logical input: one step up or down on one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// One step darker.
    BlacknessUp,
    /// One step lighter.
    BlacknessDown,
    /// One step more colorful.
    ChromaticnessUp,
    /// One step less colorful.
    ChromaticnessDown,
    /// One step along the circle, Y toward R.
    HueUp,
    /// One step back along the circle, R toward Y.
    HueDown,
}

impl Trigger {
    /// Every trigger, in the order they are processed within a single tick.
    pub const ALL: [Trigger; 6] = [
        Trigger::BlacknessUp,
        Trigger::BlacknessDown,
        Trigger::ChromaticnessUp,
        Trigger::ChromaticnessDown,
        Trigger::HueUp,
        Trigger::HueDown,
    ];

    /// The axis this trigger moves along.
    pub fn axis(self) -> Axis {
        match self {
            Trigger::BlacknessUp | Trigger::BlacknessDown => Axis::Blackness,
            Trigger::ChromaticnessUp | Trigger::ChromaticnessDown => Axis::Chromaticness,
            Trigger::HueUp | Trigger::HueDown => Axis::Hue,
        }
    }

    /// The step this trigger takes along its axis: +1 or -1.
    pub fn direction(self) -> i32 {
        match self {
            Trigger::BlacknessUp | Trigger::ChromaticnessUp | Trigger::HueUp => 1,
            Trigger::BlacknessDown | Trigger::ChromaticnessDown | Trigger::HueDown => -1,
        }
    }

    /// The `(blackness, chromaticness, hue)` steps to pass to [`NCSColor::adjust`].
    pub fn steps(self) -> (i32, i32, i32) {
        let d = self.direction();
        match self.axis() {
            Axis::Blackness => (d, 0, 0),
            Axis::Chromaticness => (0, d, 0),
            Axis::Hue => (0, 0, d),
        }
    }
}

/// Turns held inputs into presses. A trigger counts as pressed on the first tick it is held, and
/// doesn't count again until it has been released for at least one tick, so holding a key down
/// moves the color exactly once.
///
/// # Example
///
/// ```
/// # use std::collections::HashSet;
/// # use ncs_palette::explorer::{EdgeDetector, Trigger};
/// let mut detector = EdgeDetector::new();
/// let held: HashSet<Trigger> = vec![Trigger::HueUp].into_iter().collect();
/// assert_eq!(detector.edges(&held), vec![Trigger::HueUp]);
/// assert!(detector.edges(&held).is_empty());
/// assert!(detector.edges(&HashSet::new()).is_empty());
/// assert_eq!(detector.edges(&held), vec![Trigger::HueUp]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    previous: HashSet<Trigger>,
}

impl EdgeDetector {
    /// Creates a detector that considers nothing held.
    pub fn new() -> EdgeDetector {
        EdgeDetector::default()
    }

    /// Given the triggers held this tick, returns the ones that weren't held last tick, in the
    /// order of [`Trigger::ALL`].
    pub fn edges(&mut self, held: &HashSet<Trigger>) -> Vec<Trigger> {
        let pressed = Trigger::ALL
            .iter()
            .cloned()
            .filter(|t| held.contains(t) && !self.previous.contains(t))
            .collect();
        self.previous = held.clone();
        pressed
    }
}

/// One cell of the swatch grid. Rows step blackness and columns step hue, both counted from the
/// center of the grid, which is the current color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Blackness steps from the center: negative rows are above it and lighter.
    pub row: i32,
    /// Hue steps from the center: negative columns are to its left.
    pub col: i32,
    /// The color of this cell.
    pub color: NCSColor,
}

impl Swatch {
    /// The background to paint the cell with.
    pub fn fill(&self) -> RGBColor {
        RGBColor::from(self.color)
    }

    /// The two labels written on the cell: the NCS notation and the RGB hex code.
    pub fn labels(&self) -> Result<(String, String), NCSFormatError> {
        Ok((self.color.notation()?, self.color.hex()))
    }
}

/// The state of an exploring session, which is just the current color. Input handling consumes the
/// state and returns the next one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Explorer {
    current: NCSColor,
}

impl Explorer {
    /// Starts exploring from the given color.
    pub fn new(seed: NCSColor) -> Explorer {
        Explorer { current: seed }
    }

    /// The color at the center of the grid.
    pub fn current(&self) -> NCSColor {
        self.current
    }

    /// Applies the presses from one tick, in order, and returns the new state. Each press moves the
    /// current color one step along its axis.
    ///
    /// # Example
    ///
    /// ```
    /// # use ncs_palette::prelude::*;
    /// # use ncs_palette::explorer::{Explorer, Trigger};
    /// let explorer = Explorer::new("1050-R90B".parse().unwrap());
    /// let explorer = explorer.handle_input(&[Trigger::BlacknessUp, Trigger::HueUp]);
    /// assert_eq!(explorer.current().to_string(), "2050-B");
    /// ```
    pub fn handle_input(self, presses: &[Trigger]) -> Explorer {
        presses.iter().fold(self, |state, &trigger| {
            let (b, c, h) = trigger.steps();
            let next = state.current.adjust(b, c, h);
            debug!("{:?}: {:?} -> {:?}", trigger, state.current, next);
            Explorer { current: next }
        })
    }

    /// The grid of colors around the current one, `2 * radius + 1` cells on a side, in row-major
    /// order. The cell at row `j` and column `i` is the current color moved `j` steps in blackness
    /// and `i` steps in hue. A radius of 0 gives just the current color.
    pub fn grid(&self, radius: u16) -> Vec<Swatch> {
        let radius = i32::from(radius);
        let mut swatches = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)) as usize);
        for row in -radius..=radius {
            for col in -radius..=radius {
                swatches.push(Swatch {
                    row,
                    col,
                    color: self.current.adjust(row, 0, col),
                });
            }
        }
        swatches
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn held(triggers: &[Trigger]) -> HashSet<Trigger> {
        triggers.iter().cloned().collect()
    }

    fn seed() -> NCSColor {
        "1050-R90B".parse().unwrap()
    }

    #[test]
    fn test_trigger_steps() {
        assert_eq!(Trigger::BlacknessUp.steps(), (1, 0, 0));
        assert_eq!(Trigger::BlacknessDown.steps(), (-1, 0, 0));
        assert_eq!(Trigger::ChromaticnessUp.steps(), (0, 1, 0));
        assert_eq!(Trigger::ChromaticnessDown.steps(), (0, -1, 0));
        assert_eq!(Trigger::HueUp.steps(), (0, 0, 1));
        assert_eq!(Trigger::HueDown.steps(), (0, 0, -1));
        // every trigger touches exactly one axis
        for t in Trigger::ALL.iter() {
            let (b, c, h) = t.steps();
            assert_eq!(b.abs() + c.abs() + h.abs(), 1);
        }
    }

    #[test]
    fn test_edges_fire_once_per_press() {
        let mut detector = EdgeDetector::new();
        let hold = held(&[Trigger::BlacknessUp]);
        let mut count = 0;
        for _ in 0..30 {
            count += detector.edges(&hold).len();
        }
        assert_eq!(count, 1);
        detector.edges(&HashSet::new());
        assert_eq!(detector.edges(&hold), vec![Trigger::BlacknessUp]);
    }

    #[test]
    fn test_edges_in_canonical_order() {
        let mut detector = EdgeDetector::new();
        let all = held(&[Trigger::HueDown, Trigger::ChromaticnessUp, Trigger::BlacknessDown]);
        assert_eq!(
            detector.edges(&all),
            vec![
                Trigger::BlacknessDown,
                Trigger::ChromaticnessUp,
                Trigger::HueDown
            ]
        );
        // adding a key while others are held only reports the new one
        let more = held(&[
            Trigger::HueDown,
            Trigger::ChromaticnessUp,
            Trigger::BlacknessDown,
            Trigger::HueUp,
        ]);
        assert_eq!(detector.edges(&more), vec![Trigger::HueUp]);
    }

    #[test]
    fn test_handle_input() {
        let explorer = Explorer::new(seed());
        assert_eq!(explorer.handle_input(&[]), explorer);
        let darker = explorer.handle_input(&[Trigger::BlacknessUp]);
        assert_eq!(darker.current().blackness, 20);
        let back = darker.handle_input(&[Trigger::BlacknessDown]);
        assert_eq!(back, explorer);
        let moved = explorer.handle_input(&[Trigger::ChromaticnessDown, Trigger::HueDown]);
        assert_eq!(moved.current().to_string(), "1040-R80B");
    }

    #[test]
    fn test_session_is_deterministic() {
        let script = [
            Trigger::BlacknessUp,
            Trigger::ChromaticnessUp,
            Trigger::ChromaticnessUp,
            Trigger::ChromaticnessUp,
            Trigger::ChromaticnessUp,
            Trigger::ChromaticnessUp,
            Trigger::HueUp,
            Trigger::BlacknessUp,
            Trigger::HueDown,
            Trigger::HueDown,
        ];
        let run = || {
            let mut explorer = Explorer::new(seed());
            let mut history = vec![];
            for &t in script.iter() {
                explorer = explorer.handle_input(&[t]);
                history.push(explorer.current());
            }
            history
        };
        let first = run();
        assert_eq!(first, run());
        // 10+10 black, then chromaticness tops out at the 80 the blackness leaves it
        assert_eq!(first[5].to_string(), "2080-R90B");
        // the second blackness step can only take what's left
        assert_eq!(first[7].to_string(), "2080-B");
        assert_eq!(first[9].to_string(), "2080-R80B");
    }

    #[test]
    fn test_grid_shape() {
        let explorer = Explorer::new(seed());
        let grid = explorer.grid(4);
        assert_eq!(grid.len(), 81);
        assert_eq!((grid[0].row, grid[0].col), (-4, -4));
        assert_eq!((grid[80].row, grid[80].col), (4, 4));
        let center = grid[40];
        assert_eq!((center.row, center.col), (0, 0));
        assert_eq!(center.color, explorer.current());

        let single = explorer.grid(0);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].color, explorer.current());
    }

    #[test]
    fn test_grid_cells() {
        let explorer = Explorer::new(seed());
        for swatch in explorer.grid(4) {
            let color = swatch.color;
            assert_eq!(color.chromaticness, 50);
            assert_eq!(color, explorer.current().adjust(swatch.row, 0, swatch.col));
            assert!(swatch.labels().is_ok());
        }
        let grid = explorer.grid(1);
        // top left: lighter by a step and one hue code back
        assert_eq!(grid[0].color.to_string(), "0050-R80B");
        // bottom right
        assert_eq!(grid[8].color.to_string(), "2050-B");
        // lighter than 0 clamps instead of wrapping
        assert_eq!(explorer.grid(4)[0].color.to_string(), "0050-R50B");
    }

    #[test]
    fn test_swatch_labels() {
        let swatch = Explorer::new(seed()).grid(0)[0];
        let (notation, hex) = swatch.labels().unwrap();
        assert_eq!(notation, "1050-R90B");
        assert_eq!(hex, "#467BE6");
        assert_eq!(swatch.fill().to_string(), hex);
    }
}
