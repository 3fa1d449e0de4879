#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use sr_cfg as cfg;
pub use sr_reflect as reflect;
