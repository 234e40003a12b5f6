mod catalog;
mod plugin;
mod trim;
