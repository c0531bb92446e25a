//! A terminal front-end for the [`Explorer`]: the key bindings, and a renderer that paints the swatch
//! grid with 24-bit background colors. Everything here writes to a generic [`Write`], so the binary
//! hands it the real terminal and the tests hand it a buffer.
//!
//! The keys are laid out on the left of a QWERTY keyboard, one column per axis:
//!
//! | key | action             |
//! |-----|--------------------|
//! | w   | more blackness     |
//! | q   | less blackness     |
//! | s   | more chromaticness |
//! | a   | less chromaticness |
//! | x   | hue forward        |
//! | z   | hue back           |

use std::collections::HashMap;
use std::io::{self, Write};

use termion::color::{Bg, Fg, Rgb};
use termion::event::Key;
use termion::{clear, cursor, style};

use crate::color::RGBColor;
use crate::explorer::{Explorer, Swatch, Trigger};

lazy_static! {
    static ref KEYMAP: HashMap<char, Trigger> = hashmap! {
        'w' => Trigger::BlacknessUp,
        'q' => Trigger::BlacknessDown,
        's' => Trigger::ChromaticnessUp,
        'a' => Trigger::ChromaticnessDown,
        'x' => Trigger::HueUp,
        'z' => Trigger::HueDown,
    };
}

/// Swatches brighter than this get dark text, the rest get light text.
const LIGHT_BACKGROUND: f64 = 0.6;

/// The trigger bound to a key, if any. Letters work with or without shift.
pub fn trigger_for(key: &Key) -> Option<Trigger> {
    match *key {
        Key::Char(c) => KEYMAP.get(&c.to_ascii_lowercase()).cloned(),
        _ => None,
    }
}

/// Whether a key ends the session: escape or Ctrl-C.
pub fn is_quit(key: &Key) -> bool {
    match *key {
        Key::Esc | Key::Ctrl('c') => true,
        _ => false,
    }
}

/// How the grid is laid out on screen, in terminal cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Swatches on each side of the center; 0 draws a single swatch.
    pub radius: u16,
    /// Width of one swatch.
    pub cell_width: u16,
    /// Height of one swatch. Needs at least 2 rows to fit both labels.
    pub cell_height: u16,
}

impl Default for Layout {
    fn default() -> Layout {
        Layout {
            radius: 4,
            cell_width: 11,
            cell_height: 3,
        }
    }
}

impl Layout {
    /// The columns and rows the whole picture takes, including the status line at the bottom.
    pub fn size(&self) -> (u16, u16) {
        let side = 2 * self.radius + 1;
        (side * self.cell_width, side * self.cell_height + 1)
    }

    /// The 1-based terminal position of a swatch's top left corner.
    fn origin(&self, swatch: &Swatch) -> (u16, u16) {
        let radius = i32::from(self.radius);
        let x = 1 + (swatch.col + radius) * i32::from(self.cell_width);
        let y = 1 + (swatch.row + radius) * i32::from(self.cell_height);
        (x as u16, y as u16)
    }
}

fn rgb(color: RGBColor) -> Rgb {
    let (r, g, b) = color.int_rgb_tup();
    Rgb(r, g, b)
}

/// Pads or cuts a label so it fills a swatch row exactly, with one column of margin on the left.
fn fit(text: &str, width: usize) -> String {
    let padded = format!(" {}", text);
    let cut: String = padded.chars().take(width).collect();
    format!("{:<width$}", cut, width = width)
}

fn draw_swatch<W: Write>(out: &mut W, swatch: &Swatch, layout: &Layout) -> io::Result<()> {
    let (notation, hex) = swatch
        .labels()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let fill = swatch.fill();
    let ink = if fill.brightness() > LIGHT_BACKGROUND {
        Rgb(0, 0, 0)
    } else {
        Rgb(255, 255, 255)
    };
    let (x, y) = layout.origin(swatch);
    let width = layout.cell_width as usize;
    for line in 0..layout.cell_height {
        let text = match line {
            0 => notation.as_str(),
            1 => hex.as_str(),
            _ => "",
        };
        write!(
            out,
            "{}{}{}{}",
            cursor::Goto(x, y + line),
            Bg(rgb(fill)),
            Fg(ink),
            fit(text, width)
        )?;
    }
    Ok(())
}

/// Clears the screen and draws the whole grid around the explorer's current color, followed by a
/// status line.
pub fn draw<W: Write>(out: &mut W, explorer: &Explorer, layout: &Layout) -> io::Result<()> {
    write!(out, "{}{}", style::Reset, clear::All)?;
    for swatch in explorer.grid(layout.radius) {
        draw_swatch(out, &swatch, layout)?;
    }
    let center = explorer.current();
    let (_, rows) = layout.size();
    write!(
        out,
        "{}{} {} {}  w/q blackness  s/a chromaticness  x/z hue  esc quit",
        cursor::Goto(1, rows),
        style::Reset,
        center,
        center.hex()
    )?;
    trace!("drew grid of radius {} around {}", layout.radius, center);
    out.flush()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colors::NCSColor;

    fn explorer() -> Explorer {
        Explorer::new("1050-R90B".parse().unwrap())
    }

    fn render(layout: &Layout) -> String {
        let mut buf: Vec<u8> = vec![];
        draw(&mut buf, &explorer(), layout).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_keymap() {
        assert_eq!(trigger_for(&Key::Char('w')), Some(Trigger::BlacknessUp));
        assert_eq!(trigger_for(&Key::Char('Q')), Some(Trigger::BlacknessDown));
        assert_eq!(trigger_for(&Key::Char('s')), Some(Trigger::ChromaticnessUp));
        assert_eq!(trigger_for(&Key::Char('a')), Some(Trigger::ChromaticnessDown));
        assert_eq!(trigger_for(&Key::Char('x')), Some(Trigger::HueUp));
        assert_eq!(trigger_for(&Key::Char('Z')), Some(Trigger::HueDown));
        assert_eq!(trigger_for(&Key::Char('e')), None);
        assert_eq!(trigger_for(&Key::Up), None);
        // every trigger is reachable
        for t in Trigger::ALL.iter() {
            assert!(KEYMAP.values().any(|bound| bound == t));
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&Key::Esc));
        assert!(is_quit(&Key::Ctrl('c')));
        assert!(!is_quit(&Key::Char('q')));
    }

    #[test]
    fn test_layout() {
        let layout = Layout::default();
        assert_eq!(layout.size(), (99, 28));
        let single = Layout {
            radius: 0,
            ..Layout::default()
        };
        assert_eq!(single.size(), (11, 4));
        let color = explorer().current();
        let top_left = Swatch {
            row: -4,
            col: -4,
            color,
        };
        let center = Swatch {
            row: 0,
            col: 0,
            color,
        };
        assert_eq!(layout.origin(&top_left), (1, 1));
        assert_eq!(layout.origin(&center), (45, 13));
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("#467BE6", 11), " #467BE6   ");
        assert_eq!(fit("1050-R90B", 6), " 1050-");
        assert_eq!(fit("", 3), "   ");
    }

    #[test]
    fn test_draw_grid() {
        let out = render(&Layout::default());
        // every neighbor's labels show up
        for swatch in explorer().grid(4) {
            let (notation, hex) = swatch.labels().unwrap();
            assert!(out.contains(&notation), "missing {}", notation);
            assert!(out.contains(&hex), "missing {}", hex);
        }
        // the center is painted in its own color
        assert!(out.contains(&format!("{}", Bg(Rgb(0x46, 0x7B, 0xE6)))));
        assert!(out.contains("1050-R90B #467BE6  w/q"));
    }

    #[test]
    fn test_draw_single_swatch() {
        let out = render(&Layout {
            radius: 0,
            ..Layout::default()
        });
        assert!(out.contains(&format!("{}", cursor::Goto(1, 1))));
        assert!(!out.contains("2050-R90B"));
        assert!(out.contains(" 1050-R90B "));
    }

    #[test]
    fn test_text_contrast() {
        let light: NCSColor = "0010-Y".parse().unwrap();
        let dark: NCSColor = "8010-Y".parse().unwrap();
        let mut buf: Vec<u8> = vec![];
        let layout = Layout {
            radius: 0,
            ..Layout::default()
        };
        draw(&mut buf, &Explorer::new(light), &layout).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains(&format!("{}", Fg(Rgb(0, 0, 0)))));
        let mut buf: Vec<u8> = vec![];
        draw(&mut buf, &Explorer::new(dark), &layout).unwrap();
        assert!(String::from_utf8(buf)
            .unwrap()
            .contains(&format!("{}", Fg(Rgb(255, 255, 255)))));
    }
}
