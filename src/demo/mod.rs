//! Line-driven stand-ins for the picker surface and a provider.

mod command;
mod provider;
mod surface;

pub(crate) use command::Command;
pub(crate) use provider::DemoProvider;
pub(crate) use surface::ConsoleSurface;
