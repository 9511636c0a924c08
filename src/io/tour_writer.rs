use std::io::Write;

use itertools::Itertools;

use crate::utils::{Tour, city_label};

/// Writes a human-readable summary of a tour, e.g.
/// ```text
/// Route: A B D C A
/// Cost: 80
/// ```
pub trait TourWriter {
    fn try_write_report<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
}

impl TourWriter for Tour {
    fn try_write_report<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "Route: {}",
            self.path().iter().map(|&u| city_label(u)).join(" ")
        )?;
        writeln!(writer, "Cost: {}", self.cost())
    }
}
