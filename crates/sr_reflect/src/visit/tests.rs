use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::derive::Reflect;
use crate::info::FieldInfo;
use crate::visit::{self, FieldMut, FieldRef, Visitor, VisitorMut};
use crate::{Leaf, Reflect};

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
struct Data {
    foo: String,
    #[reflect(skip)]
    bar: Vec<i32>,
    baz: Vec<f32>,
}

mod hidden {
    use crate::derive::Reflect;

    #[derive(Reflect, Default)]
    pub struct Private {
        x: [i32; 1],
        y: usize,
    }
}

fn points() -> Points {
    Points {
        pt1: Point { x: 1.0, y: 2.0 },
        pt2: Point { x: 3.0, y: 4.0 },
        pt3: Point { x: 5.0, y: 6.0 },
    }
}

/// Records every call as a line of text.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Visitor for Recorder {
    fn visit<T: Leaf>(&mut self, field: FieldRef<'_, T>) {
        self.events
            .push(format!("{}#{} = {:?}", field.name(), field.index(), field.get()));
    }

    fn enter(&mut self, info: &'static FieldInfo) {
        self.events.push(format!("enter {}", info.name()));
    }

    fn exit(&mut self, info: &'static FieldInfo) {
        self.events.push(format!("exit {}", info.name()));
    }
}

#[test]
fn flat_struct_in_order() {
    let mut recorder = Recorder::default();
    visit::walk(&mut recorder, &Point { x: 5.0, y: 10.0 });

    assert_eq!(recorder.events, ["x#0 = 5.0", "y#1 = 10.0"]);
}

#[test]
fn nested_structs_are_entered() {
    let mut recorder = Recorder::default();
    visit::walk(&mut recorder, &points());

    assert_eq!(recorder.events, [
        "enter pt1", "x#0 = 1.0", "y#1 = 2.0", "exit pt1",
        "enter pt2", "x#0 = 3.0", "y#1 = 4.0", "exit pt2",
        "enter pt3", "x#0 = 5.0", "y#1 = 6.0", "exit pt3",
    ]);
}

#[test]
fn nested_structs_never_reach_the_callback() {
    let mut leaves = 0;
    visit::visit(&points(), |field| {
        assert!(field.get().is::<f32>());
        assert!(!field.get().is::<Point>());
        leaves += 1;
    });
    assert_eq!(leaves, 6);
}

#[test]
fn hooks_are_balanced() {
    let depth = RefCell::new(0_i32);
    let max = RefCell::new(0_i32);

    visit::visit_with(
        &points(),
        |_| assert_eq!(*depth.borrow(), 1),
        |_| {
            *depth.borrow_mut() += 1;
            let d = *depth.borrow();
            max.replace_with(|m| d.max(*m));
        },
        |_| *depth.borrow_mut() -= 1,
    );

    assert_eq!(depth.into_inner(), 0);
    assert_eq!(max.into_inner(), 1);
}

#[test]
fn skipped_fields_are_not_visited() {
    let data = Data {
        foo: String::from("Hello World!"),
        bar: Vec::from([1, 2, 3]),
        baz: Vec::from([2.0, 4.0, 6.0]),
    };

    let mut names = Vec::new();
    let mut strings = 0;
    visit::visit(&data, |field| {
        names.push(field.name());
        if field.downcast_ref::<String>().is_some() {
            strings += 1;
        }
    });

    assert_eq!(names, ["foo", "baz"]);
    assert_eq!(strings, 1);
    assert_eq!(data.bar.len(), 3);
}

#[test]
fn private_fields_are_visited() {
    let mut recorder = Recorder::default();
    visit::walk(&mut recorder, &hidden::Private::default());

    assert_eq!(recorder.events, ["x#0 = [0]", "y#1 = 0"]);
}

#[test]
fn mutation_is_visible_to_caller() {
    let mut value = points();
    visit::visit_mut(&mut value, |mut field| {
        if let Some(v) = field.downcast_mut::<f32>() {
            *v = -*v;
        }
    });

    assert_eq!(value.pt2.x, -3.0);
    assert_eq!(value.pt3.y, -6.0);
}

#[test]
fn mutable_walk_has_same_order() {
    #[derive(Default)]
    struct Numbering {
        next: f32,
        opened: Vec<&'static str>,
    }

    impl VisitorMut for Numbering {
        fn visit<T: Leaf>(&mut self, field: FieldMut<'_, T>) {
            if let Some(v) = field.erase().downcast_mut::<f32>() {
                *v = self.next;
                self.next += 1.0;
            }
        }

        fn enter(&mut self, info: &'static FieldInfo) {
            self.opened.push(info.name());
        }
    }

    let mut value = points();
    let mut numbering = Numbering::default();
    visit::walk_mut(&mut numbering, &mut value);

    assert_eq!(numbering.opened, ["pt1", "pt2", "pt3"]);
    assert_eq!((value.pt1.x, value.pt1.y), (0.0, 1.0));
    assert_eq!((value.pt3.x, value.pt3.y), (4.0, 5.0));
}

#[test]
fn traversal_is_repeatable() {
    let value = points();

    let mut first = Recorder::default();
    let mut second = Recorder::default();
    visit::walk(&mut first, &value);
    visit::walk(&mut &mut second, &value);

    assert_eq!(first.events, second.events);
}

#[test]
fn top_level_walk_fires_hooks() {
    let value = Point { x: 0.0, y: 0.0 };
    let mut recorder = Recorder::default();
    value.walk(<Points as crate::ops::Field<0>>::INFO, &mut recorder);

    assert_eq!(recorder.events, ["enter pt1", "x#0 = 0.0", "y#1 = 0.0", "exit pt1"]);
}
