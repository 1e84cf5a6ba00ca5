use log::{debug, error, trace, warn};

use crate::core::{BinKind, EnergyEdge, Tally, TallyKind, Tfc, TfcResult};
use crate::error::{Error, Result};
use crate::parsers::*;

use super::Reader;

// ! Tally block
impl Reader<'_> {
    /// Read one tally block, which must declare itself as `expected`
    pub(super) fn parse_tally(&self, n: usize, expected: u32) -> Result<(Tally, usize)> {
        debug!("---------------------");
        debug!(" Parsing Tally block ");
        debug!("---------------------");

        let mut tally = Tally::new(expected);

        // read tally data into the new tally in file order
        let n = self.tally_header(&mut tally, n)?;
        let n = self.tally_bins(&mut tally, n)?;
        let n = self.tally_results(&mut tally, n)?;
        let n = self.tally_tfc(&mut tally, n)?;

        Ok((tally, n))
    }

    fn tally_header(&self, tally: &mut Tally, n: usize) -> Result<usize> {
        // read the tally header data
        let n = self.skip_empty(n);
        let expected = format!("tally {} header", tally.id);
        let line = self.line(n, &expected)?;
        let header = tally_header(line)
            .map_err(|_| Error::format(n, &expected, line))?
            .1;
        debug!("Tally id    = {:?}", header.id);
        debug!("Particle    = {:?}", header.particle_type);
        debug!("Type        = {:?}", header.kind);
        debug!("Modifier    = {:?}", header.modifier);

        if header.id != tally.id {
            error!("Tally {} found where {} was listed", header.id, tally.id);
            return Err(Error::format(n, expected, line));
        }

        // read the explicit particle list, which is always a single line
        let mut n = n + 1;
        if header.particle_type < 0 {
            let line = self.line(n, "particle list")?;
            let list = vector_of_i32(line)
                .ok()
                .filter(|(rest, _)| rest.is_empty())
                .ok_or_else(|| Error::format(n, "list of particle multiplicities", line))?
                .1;
            debug!("Particles   = {:?}", list);
            tally.particle_list = Some(list);
            n += 1;
        }

        // comment line is kept verbatim
        tally.comment = self.line(n, "tally comment")?.to_string();
        debug!("Comment     = {:?}", tally.comment);

        tally.particle_type = header.particle_type;
        tally.kind = header.kind;
        tally.modifier = header.modifier;

        Ok(n + 1)
    }

    fn tally_bins(&self, tally: &mut Tally, n: usize) -> Result<usize> {
        // regions, with no list for detector tallies
        let (regions, n) = self.bin_line(n, 'f', "object")?;
        let (objects, n) = self.array::<i64>(n)?;
        if objects.is_empty() {
            if tally.kind == TallyKind::None && regions.number > 0 {
                warn!("No objects listed for Tally {}", tally.id);
            }
        } else if objects.len() != regions.number {
            error!("Unexpected number of region bins");
            return Err(mismatch(tally, "object list", regions.number, objects.len()));
        }
        debug!("Regions [f] = {:?}", regions.number);
        trace!("Regions [f] = {:?}", objects);

        // single value lines, though user and segment bins may list values
        let (flagged, n) = self.bin_line(n, 'd', "total vs. direct")?;
        debug!("Flagged [d] = {:?}", flagged.number);

        let (user, n) = self.bin_line(n, 'u', "user")?;
        let (user_values, n) = self.array::<f64>(n)?;
        debug!("User    [u] = {:?}", user.number);
        trace!("User    [u] = {:?}", user_values);

        let (segment, n) = self.bin_line(n, 's', "segment")?;
        let (segment_values, n) = self.array::<f64>(n)?;
        debug!("Segment [s] = {:?}", segment.number);
        trace!("Segment [s] = {:?}", segment_values);

        let (multiplier, n) = self.bin_line(n, 'm', "multiplier")?;
        debug!("Mult    [m] = {:?}", multiplier.number);

        let (cosine, n) = self.bin_line(n, 'c', "cosine")?;
        let (cosines, n) = self.array::<f64>(n)?;
        debug!("Cosine  [c] = {:?} ({:?})", cosine.number, cosine.kind);
        trace!("Cosine  [c] = {:?}", cosines);

        // a total bin tag means the count includes the total
        let (energy, n) = self.bin_line(n, 'e', "energy")?;
        let (energies, n) = self.array::<f64>(n)?;
        let energy_count = match energy.kind {
            BinKind::Total => energy.number.saturating_sub(1),
            _ => energy.number,
        };
        debug!("Energy  [e] = {:?} ({:?})", energy.number, energy.kind);
        trace!("Energy  [e] = {:?}", energies);

        let (time, n) = self.bin_line(n, 't', "time")?;
        let (times, n) = self.array::<f64>(n)?;
        debug!("Time    [t] = {:?} ({:?})", time.number, time.kind);
        trace!("Time    [t] = {:?}", times);

        // assign everything to the tally, counts still as declared
        tally.objects = objects;
        tally.flagged_bins = flagged.number;
        tally.user_bins = user.number;
        tally.user_values = user_values;
        tally.segment_values = segment_values;
        tally.energy_kind = energy.kind;
        tally.dimensions.object_count = regions.number;
        tally.dimensions.segment_count = segment.number;
        tally.dimensions.multiplier_count = multiplier.number;
        tally.dimensions.cosine_count = cosine.number;
        tally.dimensions.energy_count = energy_count;
        tally.dimensions.time_count = time.number;
        tally.cosines = cosines;
        tally.energies = energies.into_iter().map(EnergyEdge::Value).collect();
        tally.times = times;

        Ok(n)
    }

    fn tally_results(&self, tally: &mut Tally, n: usize) -> Result<usize> {
        // make sure this is the results section
        let line = self.line(n, "vals")?;
        if !is_vals(line) {
            return Err(Error::format(n, "vals", line));
        }

        let (values, n) = self.array::<f64>(n + 1)?;
        debug!("N values    = {}", values.len());
        trace!("Values      = {:?}", values);

        tally.reshape(&values)?;
        Ok(n)
    }

    fn tally_tfc(&self, tally: &mut Tally, n: usize) -> Result<usize> {
        // get the summary info
        let line = self.line(n, "tfc")?;
        let mut chart: Tfc = tfc(line)
            .map_err(|_| Error::format(n, "tfc <n> and 8 bin indices", line))?
            .1;

        // this is the last thing in the block, may run to the end of the file
        let (series, n) = self.array::<f64>(n + 1)?;
        if series.len() % Tfc::RECORD_LENGTH != 0 {
            error!("Tally fluctuation records are not all complete");
            return Err(mismatch(
                tally,
                "tally fluctuation values",
                series.len().next_multiple_of(Tfc::RECORD_LENGTH),
                series.len(),
            ));
        }

        chart.results = series
            .chunks_exact(Tfc::RECORD_LENGTH)
            .map(TfcResult::from)
            .collect();
        debug!("N Tfc       = {}", chart.results.len());
        trace!("Tfc results = {:?}", chart.results);

        // validate the length of parsed list
        let expected = chart.n_records as usize;
        let found = chart.results.len();
        if expected != found {
            error!("Unexpected number of Tally Fluctuation results");
            return Err(mismatch(tally, "tally fluctuation records", expected, found));
        }

        tally.tfc = chart;
        Ok(n)
    }

    /// Single bin count line for `token`
    fn bin_line(&self, n: usize, token: char, name: &str) -> Result<(BinLine, usize)> {
        let expected = format!("{name} bin count ({token})");
        let line = self.line(n, &expected)?;
        let bins = bin_line(line, token)
            .map_err(|_| Error::format(n, &expected, line))?
            .1;
        Ok((bins, n + 1))
    }
}

fn mismatch(tally: &Tally, context: &str, expected: usize, found: usize) -> Error {
    Error::DimensionMismatch {
        tally: tally.id,
        context: context.to_string(),
        expected,
        found,
    }
}
