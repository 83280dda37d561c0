use crate::domain::order::CycleReport;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ReportRow {
    order: u32,
    prewash: bool,
    dry: bool,
    wax: bool,
    price: String,
    phases: String,
    revenue: String,
}

impl From<&CycleReport> for ReportRow {
    fn from(report: &CycleReport) -> Self {
        let phases = report
            .phases
            .iter()
            .map(|phase| phase.name())
            .collect::<Vec<_>>()
            .join(">");
        Self {
            order: report.order,
            prewash: report.options.prewash_by_hand,
            dry: report.options.dry_by_hand,
            wax: report.options.waxed,
            price: report.price.to_string(),
            phases,
            revenue: report.revenue.to_string(),
        }
    }
}

/// Writes cycle reports as CSV, one row per completed wash.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_reports<'a>(
        &mut self,
        reports: impl IntoIterator<Item = &'a CycleReport>,
    ) -> Result<()> {
        for report in reports {
            self.writer.serialize(ReportRow::from(report))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Price;
    use crate::domain::options::WashOptions;
    use crate::domain::phase::Phase;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writes_header_and_rows() {
        let report = CycleReport {
            order: 4,
            options: WashOptions::new(false, true, false),
            price: Price::new(dec!(6)),
            phases: vec![
                Phase::Idle,
                Phase::Charging,
                Phase::Rinsing,
                Phase::Soaping,
                Phase::Rollers,
                Phase::HandDrying,
                Phase::Idle,
            ],
            revenue: Price::new(dec!(11)),
        };

        let mut buf = Vec::new();
        ReportWriter::new(&mut buf)
            .write_reports([&report])
            .unwrap();
        let out = String::from_utf8(buf).unwrap();

        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("order,prewash,dry,wax,price,phases,revenue")
        );
        assert_eq!(
            lines.next(),
            Some("4,false,true,false,6.00,Idle>Charging>Rinsing>Soaping>Rollers>HandDrying>Idle,11.00")
        );
    }
}
