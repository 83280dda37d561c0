use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Random extras for one order. Roughly a quarter of the orders ask for wax
/// without hand drying and are expected to be rejected.
pub fn random_options<R: Rng>(rng: &mut R) -> (bool, bool, bool) {
    (rng.r#gen(), rng.r#gen(), rng.r#gen())
}

pub fn generate_orders_csv<R: Rng>(
    path: &Path,
    rows: usize,
    rng: &mut R,
) -> Result<Vec<(bool, bool, bool)>, Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["order", "prewash", "dry", "wax"])?;

    let mut generated = Vec::with_capacity(rows);
    for i in 1..=rows {
        let (prewash, dry, wax) = random_options(rng);
        wtr.write_record([
            i.to_string(),
            prewash.to_string(),
            dry.to_string(),
            wax.to_string(),
        ])?;
        generated.push((prewash, dry, wax));
    }

    wtr.flush()?;
    Ok(generated)
}
