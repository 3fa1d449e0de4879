use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::core::net::IpAddr);
impl_reflect_opaque!(::core::net::Ipv4Addr);
impl_reflect_opaque!(::core::net::Ipv6Addr);
impl_reflect_opaque!(::core::net::SocketAddr);
impl_reflect_opaque!(::core::net::SocketAddrV4);
impl_reflect_opaque!(::core::net::SocketAddrV6);
