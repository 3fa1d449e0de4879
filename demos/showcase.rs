//! A tour of `sr_core::reflect`.
//!
//! Run with `cargo run --example showcase`.

use sr_core::reflect::derive::Reflect;
use sr_core::reflect::ops::{Field, Struct};
use sr_core::reflect::{is_reflectable, print, visit};

#[derive(Reflect, Default)]
struct Point {
    x: f32,
    y: f32,
}

mod private {
    use sr_core::reflect::derive::Reflect;

    /// Reflection reaches private fields too.
    #[derive(Reflect, Default)]
    pub struct Private {
        x: [i32; 1],
        y: usize,
    }
}

#[derive(Reflect)]
struct Data {
    foo: String,
    #[reflect(skip)]
    bar: Vec<i32>,
    baz: Vec<f32>,
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

impl Default for ManyPoints {
    fn default() -> Self {
        Self {
            points1: Points {
                pt1: Point { x: 6.0, y: 5.0 },
                pt2: Point { x: 4.0, y: 3.0 },
                pt3: Point { x: 2.0, y: 1.0 },
            },
            pt: Point { x: 5.0, y: 5.0 },
            x: 10,
            y: 20,
            points2: Points {
                pt1: Point { x: -16.0, y: -15.0 },
                pt2: Point { x: -14.0, y: -13.0 },
                pt3: Point { x: -12.0, y: -11.0 },
            },
        }
    }
}

#[allow(dead_code)]
struct Plain;

fn main() {
    // Simple printing.
    print::print(&Point::default());
    println!();

    // Shared access only reads.
    let point = Point { x: 5.0, y: 10.0 };
    print::print(&point);
    println!();

    print::print(&private::Private::default());
    println!();

    println!("Point is reflectable: {}", is_reflectable!(Point));
    println!("Plain is reflectable: {}", is_reflectable!(Plain));
    println!();

    // A closure over every leaf.
    let data = Data {
        foo: String::from("Hello World!"),
        bar: vec![1, 2, 3],
        baz: vec![2.0, 4.0, 6.0],
    };
    println!(
        "Data reflects {} fields, `bar` ({} items) is skipped",
        Data::FIELD_COUNT,
        data.bar.len()
    );

    let mut counter = 0;
    visit::visit(&data, |field| {
        println!("{counter}. {} = {:?}", field.name(), field.get());
        counter += 1;
    });

    // Dispatch on the leaf type.
    visit::visit(&data, |field| {
        if let Some(text) = field.downcast_ref::<String>() {
            println!("`{}` is a string of {} bytes", field.name(), text.len());
        }
    });

    // Accessors of a field, independent of any instance.
    let y = <Point as Field<1>>::MEMBER;
    println!("{} of point = {}", <Point as Field<1>>::INFO.name(), y.get(&point));

    println!("\nRecursive printing..");
    let points = Points {
        pt1: Point { x: 1.0, y: 2.0 },
        pt2: Point { x: 3.0, y: 4.0 },
        pt3: Point { x: 5.0, y: 6.0 },
    };
    print::print(&points);
    println!();

    print::pretty_print(&ManyPoints::default());

    // Hooks around nested structs.
    let depth = std::cell::Cell::new(0_usize);
    visit::visit_with(
        &points,
        |field| println!("{:indent$}{}", "", field.name(), indent = depth.get() * 2),
        |info| {
            println!("{:indent$}> {}", "", info.name(), indent = depth.get() * 2);
            depth.set(depth.get() + 1);
        },
        |_| depth.set(depth.get() - 1),
    );
}
