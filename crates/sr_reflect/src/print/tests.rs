use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::derive::Reflect;

use super::{FlatPrinter, PrettyPrinter, ReflectDisplay};

#[derive(Reflect)]
struct Point {
    x: f32,
    y: f32,
}

#[derive(Reflect)]
struct Points {
    pt1: Point,
    pt2: Point,
    pt3: Point,
}

#[derive(Reflect)]
struct ManyPoints {
    points1: Points,
    pt: Point,
    x: i32,
    y: i32,
    points2: Points,
}

const fn pt(x: f32, y: f32) -> Point {
    Point { x, y }
}

fn many_points() -> ManyPoints {
    ManyPoints {
        points1: Points {
            pt1: pt(6.0, 5.0),
            pt2: pt(4.0, 3.0),
            pt3: pt(2.0, 1.0),
        },
        pt: pt(5.0, 5.0),
        x: 10,
        y: 20,
        points2: Points {
            pt1: pt(-16.0, -15.0),
            pt2: pt(-14.0, -13.0),
            pt3: pt(-12.0, -11.0),
        },
    }
}

#[test]
fn flat_point() {
    assert_eq!(FlatPrinter::new().format(&pt(5.0, 10.0)), "x = 5.0\ny = 10.0\n");
}

#[test]
fn flat_nested_paths() {
    let points = Points {
        pt1: pt(1.0, 2.0),
        pt2: pt(3.0, 4.0),
        pt3: pt(5.0, 6.0),
    };

    let expected = "\
pt1.x = 1.0
pt1.y = 2.0
pt2.x = 3.0
pt2.y = 4.0
pt3.x = 5.0
pt3.y = 6.0
";
    assert_eq!(FlatPrinter::new().format(&points), expected);
    assert_eq!(format!("{}", points.flat()), expected);
}

#[test]
fn flat_path_resets_between_siblings() {
    let text = FlatPrinter::new().format(&many_points());
    let lines: alloc::vec::Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6 + 2 + 2 + 6);
    assert_eq!(lines[5], "points1.pt3.y = 1.0");
    assert_eq!(lines[6], "pt.x = 5.0");
    assert_eq!(lines[8], "x = 10");
    assert_eq!(lines[9], "y = 20");
    assert_eq!(lines[10], "points2.pt1.x = -16.0");
}

#[test]
fn pretty_point() {
    assert_eq!(
        PrettyPrinter::new().format(&pt(0.0, 0.0)),
        "{\n    x = 0.0,\n    y = 0.0,\n}\n"
    );
}

#[test]
fn pretty_many_points() {
    let expected = "\
{
    points1 = {
        pt1 = {
            x = 6.0,
            y = 5.0,
        },
        pt2 = {
            x = 4.0,
            y = 3.0,
        },
        pt3 = {
            x = 2.0,
            y = 1.0,
        },
    },
    pt = {
        x = 5.0,
        y = 5.0,
    },
    x = 10,
    y = 20,
    points2 = {
        pt1 = {
            x = -16.0,
            y = -15.0,
        },
        pt2 = {
            x = -14.0,
            y = -13.0,
        },
        pt3 = {
            x = -12.0,
            y = -11.0,
        },
    },
}
";
    let value = many_points();
    assert_eq!(PrettyPrinter::new().format(&value), expected);
    assert_eq!(format!("{}", value.pretty()), expected);
}

#[test]
fn printing_is_repeatable() {
    let value = many_points();
    let printer = PrettyPrinter::default();

    assert_eq!(printer.format(&value), printer.format(&value));
    assert_eq!(FlatPrinter::default().format(&value), value.flat().to_string());
}

#[test]
fn leaf_values_use_debug() {
    #[derive(Reflect)]
    struct Labels {
        name: String,
        tags: (char, Option<u8>),
    }

    let labels = Labels {
        name: String::from("a\"b"),
        tags: ('c', None),
    };

    assert_eq!(
        labels.flat().to_string(),
        "name = \"a\\\"b\"\ntags = ('c', None)\n"
    );
}

/// A writer accepting a fixed number of writes.
struct Budget {
    out: String,
    writes: usize,
}

impl Write for Budget {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.writes == 0 {
            return Err(fmt::Error);
        }
        self.writes -= 1;
        self.out.push_str(s);
        Ok(())
    }
}

#[test]
fn failed_write_stops_output() {
    let value = many_points();

    let mut budget = Budget {
        out: String::new(),
        writes: 3,
    };
    assert!(PrettyPrinter::new().format_to(&value, &mut budget).is_err());
    assert!(!budget.out.ends_with("}\n"));

    let mut budget = Budget {
        out: String::new(),
        writes: 2,
    };
    assert!(FlatPrinter::new().format_to(&value, &mut budget).is_err());
    assert_eq!(budget.out, "points1.");

    let mut out = String::new();
    assert!(FlatPrinter::new().format_to(&value, &mut out).is_ok());
}

#[derive(Reflect)]
#[reflect(Opaque)]
struct Broken;

impl fmt::Debug for Broken {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[derive(Reflect)]
struct WithBroken {
    ok: i32,
    broken: Broken,
}

#[test]
fn failing_leaf_is_reported_by_format_to() {
    let value = WithBroken { ok: 1, broken: Broken };

    let mut out = String::new();
    assert!(FlatPrinter::new().format_to(&value, &mut out).is_err());
    assert_eq!(out, "ok = 1\nbroken = ");

    let mut out = String::new();
    assert!(PrettyPrinter::new().format_to(&value, &mut out).is_err());
}

#[test]
#[should_panic = "a Debug implementation returned an error unexpectedly"]
fn failing_leaf_panics_in_flat_format() {
    let _ = FlatPrinter::new().format(&WithBroken { ok: 1, broken: Broken });
}

#[test]
#[should_panic = "a Debug implementation returned an error unexpectedly"]
fn failing_leaf_panics_in_pretty_format() {
    let _ = PrettyPrinter::new().format(&WithBroken { ok: 1, broken: Broken });
}
