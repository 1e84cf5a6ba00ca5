use log::debug;

use crate::error::{Error, Result};
use crate::parsers::*;
use crate::Header;

use super::Reader;

// ! Header block
impl Reader<'_> {
    pub(super) fn parse_header(&self, n: usize) -> Result<(Header, usize)> {
        debug!("----------------------");
        debug!(" Parsing Header block ");
        debug!("----------------------");

        // read the first line of the mctal file
        let expected = "code, version, probid (2), dump, nps, and rng count";
        let line = self.line(n, expected)?;
        let first = first_line(line)
            .map_err(|_| Error::format(n, expected, line))?
            .1;
        debug!("Code name   = {:?}", first.code_name);
        debug!("Version     = {:?}", first.version);
        debug!("Probid      = {:?}", first.problem_id);
        debug!("Dump        = {}", first.dump);
        debug!("NPS         = {}", first.nps);
        debug!("RNG         = {}", first.random_numbers);

        // read the title, which must be one line
        let title = self.line(n + 1, "title")?.to_string();
        debug!("Title       = {title:?}");

        // find the number of tallies and potential perturbations
        let line = self.line(n + 2, "ntal line")?;
        let (ntal, npert) = ntal_npert(line)
            .map_err(|_| Error::format(n + 2, "ntal <count>", line))?
            .1;
        debug!("n pert      = {npert}");
        debug!("n tallies   = {ntal}");

        // collect the tally numbers, nothing to read if there are none
        let (tally_numbers, next) = self.array::<u32>(n + 3)?;
        debug!("Tally ids   = {:?}", tally_numbers);

        if tally_numbers.len() != ntal as usize {
            return Err(Error::format(
                n + 3,
                format!("{ntal} tally numbers"),
                format!("{} tally numbers", tally_numbers.len()),
            ));
        }

        for (i, id) in tally_numbers.iter().enumerate() {
            if tally_numbers[..i].contains(id) {
                return Err(Error::format(
                    n + 3,
                    "unique tally numbers",
                    format!("tally {id} listed twice"),
                ));
            }
        }

        // Collate info into a Header struct for convenience
        let header = Header {
            code: first.code_name,
            version: first.version,
            probid: first.problem_id,
            dump: first.dump,
            n_particles: first.nps,
            n_random: first.random_numbers,
            title,
            n_tallies: ntal,
            n_perturbations: npert,
            tally_numbers,
        };
        debug!("Header read successful");

        Ok((header, next))
    }
}
