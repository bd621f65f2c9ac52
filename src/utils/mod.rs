pub(crate) mod logging;

pub(crate) use logging::init as init_logging;
