//! Provide [`Reflect`] implementations for common leaf types, and the
//! helpers used by generated code.
//!
//! - [`walk_struct`] / [`walk_struct_mut`]: `Reflect::walk(_mut)` of reflectable structs.
//! - [`walk_opaque`] / [`walk_opaque_mut`]: `Reflect::walk(_mut)` of leaves.
//!
//! ## Implemented Menu
//!
//! Every type below is a leaf ([`ReflectKind::Opaque`]), generic parameters
//! must be `Debug + 'static`.
//!
//! - native:
//!     - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `()`, `(P0,)`, `(P0, P1, ...)`. the num of P <= 12
//!     - `[T; N]`
//!     - `&'static str`, `String`
//! - core:
//!     - `NonZero`: I8-I128, U8-U128, Isize, Usize, `Wrapping`, `Saturating`
//!     - `Option<T>`, `Result<T, E>`
//!     - `PhantomData<T>`, `Duration`, `TypeId`
//!     - `ops`: Range, RangeInclusive, RangeFrom, RangeTo, RangeToInclusive, RangeFull
//!     - `cell`: `Cell<T>`, `RefCell<T>`, `OnceCell<T>`
//!     - `cmp`: `Ordering`, `Reverse<T>`
//!     - `sync::atomic`: `Ordering` and the integer/bool atomics the target supports
//!     - `net`: `IpAddr`, `Ipv4Addr`, `Ipv6Addr`, `SocketAddr`, `SocketAddrV4`, `SocketAddrV6`
//! - alloc:
//!     - `Vec<T>`, `VecDeque<T>`, `Box<T>`, `Rc<T>`, `Arc<T>`
//!     - `Cow<'static, str>`
//!     - `BTreeMap<K, V>`, `BTreeSet<T>`
//! - std: ("std" feature)
//!     - `OsString`, `PathBuf`
//!     - `HashMap`, `HashSet`
//!     - `Mutex<T>`, `RwLock<T>`, `OnceLock<T>`
//!     - `Instant`, `SystemTime`
//!
//! A field of any other type can still be reflected as a leaf with
//! `#[reflect(opaque)]`, see [`derive::Reflect`](crate::derive::Reflect).
//!
//! [`Reflect`]: crate::Reflect
//! [`ReflectKind::Opaque`]: crate::info::ReflectKind::Opaque

// -----------------------------------------------------------------------------
// Modules

mod alloc;
mod core;
mod native;

crate::cfg::std! { mod std; }

// -----------------------------------------------------------------------------
// Walk helpers

use crate::Leaf;
use crate::info::FieldInfo;
use crate::ops::Struct;
use crate::visit::{FieldMut, FieldRef, Visitor, VisitorMut};

/// Walk a nested reflectable struct: `enter`, its fields, `exit`.
#[inline]
pub fn walk_struct<T: Struct, V: Visitor>(object: &T, info: &'static FieldInfo, visitor: &mut V) {
    crate::cfg::debug! {
        log::trace!("enter `{}`: {}", info.name(), info.type_name());
    }
    visitor.enter(info);
    object.visit_fields(visitor);
    visitor.exit(info);
    crate::cfg::debug! {
        log::trace!("exit `{}`", info.name());
    }
}

/// Walk a nested reflectable struct mutably: `enter`, its fields, `exit`.
#[inline]
pub fn walk_struct_mut<T: Struct, V: VisitorMut>(
    object: &mut T,
    info: &'static FieldInfo,
    visitor: &mut V,
) {
    crate::cfg::debug! {
        log::trace!("enter `{}`: {}", info.name(), info.type_name());
    }
    visitor.enter(info);
    object.visit_fields_mut(visitor);
    visitor.exit(info);
    crate::cfg::debug! {
        log::trace!("exit `{}`", info.name());
    }
}

/// Hand a leaf to the visitor.
#[inline]
pub fn walk_opaque<T: Leaf, V: Visitor>(value: &T, info: &'static FieldInfo, visitor: &mut V) {
    visitor.visit(FieldRef::new(value, info));
}

/// Hand a leaf to the visitor, with exclusive access.
#[inline]
pub fn walk_opaque_mut<T: Leaf, V: VisitorMut>(
    value: &mut T,
    info: &'static FieldInfo,
    visitor: &mut V,
) {
    visitor.visit(FieldMut::new(value, info));
}

#[cfg(test)]
mod tests {
    use ::alloc::borrow::Cow;
    use ::alloc::string::String;
    use ::alloc::vec::Vec;
    use ::core::time::Duration;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Struct;
    use crate::visit;

    #[derive(Reflect)]
    struct Everything {
        flag: bool,
        letter: char,
        small: i8,
        big: u128,
        ratio: f64,
        text: &'static str,
        owned: String,
        cow: Cow<'static, str>,
        list: Vec<u8>,
        maybe: Option<i32>,
        pair: (u8, &'static str),
        grid: [[u8; 2]; 2],
        wait: Duration,
        unit: (),
    }

    #[test]
    fn leaves_are_opaque() {
        assert!(Everything::FIELDS.iter().all(|f| f.kind() == ReflectKind::Opaque));
        assert_eq!(<Option<Vec<u8>> as Reflect>::KIND, ReflectKind::Opaque);
        assert_eq!(Everything::FIELD_COUNT, 14);
    }

    #[test]
    fn leaves_keep_their_type() {
        let value = Everything {
            flag: true,
            letter: 'x',
            small: -1,
            big: 1 << 100,
            ratio: 0.25,
            text: "static",
            owned: String::from("owned"),
            cow: Cow::Borrowed("cow"),
            list: Vec::from([1, 2]),
            maybe: Some(3),
            pair: (1, "one"),
            grid: [[1, 2], [3, 4]],
            wait: Duration::from_millis(5),
            unit: (),
        };

        let mut seen = Vec::new();
        visit::visit(&value, |field| {
            assert_eq!(field.get().leaf_type_id(), field.info().ty_id());
            seen.push(field.name());
        });

        let expected: Vec<_> = Everything::struct_info().field_names().collect();
        assert_eq!(seen, expected);
    }

    #[derive(Reflect)]
    struct Counter {
        hits: ::core::cell::Cell<u32>,
        log: ::core::cell::RefCell<Vec<u8>>,
        order: ::core::cmp::Ordering,
        busy: ::core::sync::atomic::AtomicBool,
        peer: ::core::net::SocketAddr,
        name: String,
    }

    #[test]
    fn interior_mutability_and_net_leaves() {
        use ::core::net::{Ipv4Addr, SocketAddr};
        use ::core::sync::atomic::AtomicBool;

        let counter = Counter {
            hits: ::core::cell::Cell::new(3),
            log: ::core::cell::RefCell::new(Vec::from([1])),
            order: ::core::cmp::Ordering::Less,
            busy: AtomicBool::new(false),
            peer: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            name: String::from("c"),
        };

        assert!(Counter::FIELDS.iter().all(|f| f.kind() == ReflectKind::Opaque));

        counter.field::<0>().get().set(4);
        counter.field::<1>().get().borrow_mut().push(2);

        let mut lines = Vec::new();
        visit::visit(&counter, |field| {
            lines.push(::alloc::format!("{} = {:?}", field.name(), field.get()));
        });
        assert_eq!(lines, [
            "hits = Cell { value: 4 }",
            "log = RefCell { value: [1, 2] }",
            "order = Less",
            "busy = false",
            "peer = 127.0.0.1:8080",
            "name = \"c\"",
        ]);
    }

    #[derive(Debug, PartialEq)]
    struct Celsius(f32);

    #[derive(Reflect, Debug)]
    struct Pair {
        a: u8,
        b: u8,
    }

    #[derive(Reflect)]
    struct Sensor {
        #[reflect(opaque)]
        reading: Celsius,
        #[reflect(opaque)]
        pair: Pair,
        id: u32,
    }

    #[derive(Reflect)]
    struct Tagged<T> {
        #[reflect(opaque)]
        tag: T,
        count: u32,
    }

    #[test]
    fn opaque_fields_are_leaves() {
        let mut sensor = Sensor {
            reading: Celsius(21.5),
            pair: Pair { a: 1, b: 2 },
            id: 7,
        };

        assert_eq!(Sensor::FIELD_COUNT, 3);
        assert_eq!(Sensor::FIELDS[1].kind(), ReflectKind::Opaque);
        assert!(Sensor::FIELDS[0].type_is::<Celsius>());
        assert_eq!(sensor.field::<0>().get(), &Celsius(21.5));

        let mut events = Vec::new();
        let hooks = ::core::cell::Cell::new(0);
        visit::visit_with(
            &sensor,
            |field| events.push(::alloc::format!("{} = {:?}", field.name(), field.get())),
            |_| hooks.set(hooks.get() + 1),
            |_| hooks.set(hooks.get() + 1),
        );
        assert_eq!(hooks.get(), 0);
        assert_eq!(events, [
            "reading = Celsius(21.5)",
            "pair = Pair { a: 1, b: 2 }",
            "id = 7",
        ]);

        visit::visit_mut(&mut sensor, |mut field| {
            if let Some(reading) = field.downcast_mut::<Celsius>() {
                reading.0 += 1.0;
            }
        });
        assert_eq!(sensor.reading, Celsius(22.5));
    }

    #[test]
    fn generic_opaque_field() {
        let tagged = Tagged {
            tag: Celsius(0.0),
            count: 2,
        };

        let mut names = Vec::new();
        visit::visit(&tagged, |field| {
            assert_eq!(field.get().is::<Celsius>(), field.name() == "tag");
            names.push(field.name());
        });
        assert_eq!(names, ["tag", "count"]);
        assert_eq!(*tagged.field::<1>().get(), 2);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_sync_and_time_leaves() {
        use ::std::sync::{Mutex, RwLock};
        use ::std::time::{Instant, SystemTime};

        #[derive(Reflect)]
        struct Session {
            hits: Mutex<u32>,
            names: RwLock<Vec<String>>,
            started: Instant,
            created: SystemTime,
        }

        let session = Session {
            hits: Mutex::new(0),
            names: RwLock::new(Vec::new()),
            started: Instant::now(),
            created: SystemTime::UNIX_EPOCH,
        };

        // Leaves are formatted while the lock is held elsewhere.
        let _guard = session.hits.lock();
        let mut seen = Vec::new();
        visit::visit(&session, |field| {
            if field.name() == "hits" {
                assert!(::alloc::format!("{:?}", field.get()).contains("<locked>"));
            }
            seen.push(field.name());
        });
        assert_eq!(seen, ["hits", "names", "started", "created"]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_leaves() {
        use ::std::collections::{HashMap, HashSet};
        use ::std::path::PathBuf;

        #[derive(Reflect)]
        struct Files {
            roots: HashSet<PathBuf>,
            sizes: HashMap<String, u64>,
        }

        let files = Files {
            roots: HashSet::from([PathBuf::from("/tmp")]),
            sizes: HashMap::from([(String::from("a"), 1)]),
        };

        let mut count = 0;
        visit::visit(&files, |field| {
            assert!(field.get().is::<HashSet<PathBuf>>() || field.get().is::<HashMap<String, u64>>());
            count += 1;
        });
        assert_eq!(count, 2);
    }
}
