//! A connection descriptor for one physical or logical channel.

use super::source::DataSource;

/// One acquisition channel: a serial line, a TCP endpoint, a bus adapter.
///
/// The port holds its raw parameter string (decoded on demand by
/// [`Params::parse`](crate::ports::Params::parse)) and owns the data sources
/// polled through it.
#[derive(Clone, Debug)]
pub struct Port {
    /// Stable identity, as known to the external port store.
    pub id: u64,
    /// Protocol name; also names the worker's log sink.
    pub protocol: String,
    /// Channel address (device path, host:port, adapter id).
    pub address: String,
    /// Raw pipe-delimited `key=value` parameter string.
    pub params: String,
    /// Data sources acquired through this port. Fixed at configuration load.
    pub sources: Vec<DataSource>,
}

impl Port {
    /// Iterates over the sources that take part in scheduling.
    pub fn enabled_sources(&self) -> impl Iterator<Item = &DataSource> {
        self.sources.iter().filter(|s| s.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_sources_are_excluded() {
        let port = Port {
            id: 1,
            protocol: "modbus_rtu".into(),
            address: "/dev/ttyS0".into(),
            params: String::new(),
            sources: vec![
                DataSource::new("plc-a", vec![]),
                DataSource::new("plc-b", vec![]).with_enabled(false),
                DataSource::new("plc-c", vec![]),
            ],
        };

        let names: Vec<&str> = port.enabled_sources().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["plc-a", "plc-c"]);
    }
}
