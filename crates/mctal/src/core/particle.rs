//! MCNPX particle designators used in mctal tally headers

/// Entry of the particle code table
///
/// Codes are signed, with antiparticles sharing the magnitude of their
/// particle. For example, `3` is the electron and `-3` the positron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleCode {
    /// Signed particle code
    pub code: i32,
    /// Full particle name, e.g. "neutron"
    pub name: &'static str,
    /// Single character designator, prefixed by `-` for antiparticles
    pub glyph: &'static str,
}

/// Entry of the shorthand composite table
///
/// A positive particle type in a tally header refers to one of these rather
/// than listing particles explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShorthandCode {
    /// Positive shorthand code
    pub code: i32,
    /// Comma separated list of particle names
    pub names: &'static str,
    /// Compact string of particle designators, e.g. "np"
    pub glyphs: &'static str,
}

/// Complete collection of MCNPX particle codes
///
/// | Code | Name                   | Glyph |
/// | ---- | ---------------------- | ----- |
/// | 1    | neutron                | n     |
/// | -1   | anti-neutron           | -n    |
/// | 2    | photon                 | p     |
/// | 3    | electron               | e     |
/// | -3   | positron               | -e    |
/// | 4    | muon-                  | \|    |
/// | 9    | proton                 | h     |
/// | 31   | deuteron               | d     |
/// | 34   | helium-4               | a     |
/// | 35   | heavy ions             | #     |
///
/// See [PARTICLES] for the full list of 42 entries.
pub static PARTICLES: [ParticleCode; 42] = [
    p(1, "neutron", "n"),
    p(-1, "anti-neutron", "-n"),
    p(2, "photon", "p"),
    p(3, "electron", "e"),
    p(-3, "positron", "-e"),
    p(4, "muon-", "|"),
    p(-4, "anti-muon-", "-|"),
    p(5, "tau", "*"),
    p(6, "electron neutrino", "u"),
    p(-6, "anti-electron neutrino", "-u"),
    p(7, "muon neutrino", "v"),
    p(8, "tau neutrino", "w"),
    p(9, "proton", "h"),
    p(-9, "anti-proton", "-h"),
    p(10, "lambda0", "l"),
    p(11, "sigma+", "+"),
    p(12, "sigma-", "-"),
    p(13, "cascade+", "x"),
    p(14, "cascade-", "y"),
    p(15, "omega-", "o"),
    p(16, "lambda_c+", "c"),
    p(17, "cascade_c+", "!"),
    p(18, "cascade_c0", "?"),
    p(19, "lambda_b0", "<"),
    p(20, "pion+", "/"),
    p(-20, "pion-", "-/"),
    p(21, "pion0", "z"),
    p(22, "kaon+", "k"),
    p(-22, "kaon-", "-k"),
    p(23, "K0 short", "%"),
    p(24, "K0 long", "^"),
    p(25, "D+", "g"),
    p(26, "D0", "@"),
    p(27, "D_s+", "f"),
    p(28, "B+", ">"),
    p(29, "B0", "b"),
    p(30, "B_s0", "q"),
    p(31, "deuteron", "d"),
    p(32, "triton", "t"),
    p(33, "helium-3", "s"),
    p(34, "helium-4", "a"),
    p(35, "heavy ions", "#"),
];

/// Shorthand composite particle types
///
/// | Code | Particles                 | Glyphs |
/// | ---- | ------------------------- | ------ |
/// | 1    | neutron                   | n      |
/// | 2    | photon                    | p      |
/// | 3    | neutron, photon           | np     |
/// | 4    | electron                  | e      |
/// | 5    | neutron, electron         | ne     |
/// | 6    | photon, electron          | pe     |
/// | 7    | neutron, photon, electron | npe    |
pub static SHORTHAND: [ShorthandCode; 7] = [
    s(1, "neutron", "n"),
    s(2, "photon", "p"),
    s(3, "neutron, photon", "np"),
    s(4, "electron", "e"),
    s(5, "neutron, electron", "ne"),
    s(6, "photon, electron", "pe"),
    s(7, "neutron, photon, electron", "npe"),
];

const fn p(code: i32, name: &'static str, glyph: &'static str) -> ParticleCode {
    ParticleCode { code, name, glyph }
}

const fn s(code: i32, names: &'static str, glyphs: &'static str) -> ShorthandCode {
    ShorthandCode {
        code,
        names,
        glyphs,
    }
}

/// Find a particle by its signed code
///
/// ```rust
/// # use mctools_mctal::particle;
/// assert_eq!(particle(-3).unwrap().name, "positron");
/// assert!(particle(0).is_none());
/// ```
pub fn particle(code: i32) -> Option<&'static ParticleCode> {
    PARTICLES.iter().find(|p| p.code == code)
}

/// Find a shorthand composite by its positive code
pub fn shorthand(code: i32) -> Option<&'static ShorthandCode> {
    SHORTHAND.iter().find(|s| s.code == code)
}

/// Human readable description of the particles on a tally
///
/// A positive `particle_type` is looked up directly in the shorthand table
/// and `particle_list` is ignored.
///
/// A negative `particle_type` means the explicit list applies. Slot `i`
/// (0-based) holding a non-zero `m` names the particle with code `(i+1)*m`,
/// so the sign of `m` selects particle or antiparticle. Empty slots and codes
/// missing from the table are skipped.
///
/// ```rust
/// # use mctools_mctal::describe;
/// assert_eq!(describe(3, &[]), "neutron, photon");
/// assert_eq!(describe(-1, &[1, 0, -1]), "neutron, positron");
/// assert_eq!(describe(0, &[]), "");
/// ```
pub fn describe(particle_type: i32, particle_list: &[i32]) -> String {
    if particle_type > 0 {
        return shorthand(particle_type)
            .map(|s| s.names.to_string())
            .unwrap_or_default();
    }

    if particle_type == 0 {
        return String::new();
    }

    particle_list
        .iter()
        .enumerate()
        .filter(|(_, m)| **m != 0)
        .filter_map(|(i, m)| i32::try_from(i + 1).ok()?.checked_mul(*m))
        .filter_map(particle)
        .map(|p| p.name)
        .collect::<Vec<&str>>()
        .join(", ")
}
