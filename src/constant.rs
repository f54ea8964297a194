mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const SERVER_NAME: &str = built_info::PKG_NAME;
pub const SERVER_VERSION: &str = built_info::PKG_VERSION;
