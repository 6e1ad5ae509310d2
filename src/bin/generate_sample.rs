use csv::Writer;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const TITLE_WORDS: &[&str] = &[
    "Viral", "Transmission", "Dynamics", "Respiratory", "Immune", "Response",
    "Vaccine", "Efficacy", "Clinical", "Outcomes", "Genomic", "Surveillance",
    "Antibody", "Seroprevalence", "Hospitalized", "Patients", "Variant",
    "Spread", "Model", "Airborne", "Aerosol", "Infection", "Severity",
    "Pandemic", "Preparedness", "Diagnostic", "Testing", "Mortality", "Risk",
];

const ABSTRACT_WORDS: &[&str] = &[
    "we", "analyzed", "cohort", "data", "from", "patients", "across",
    "multiple", "sites", "and", "observed", "significant", "differences",
    "in", "outcomes", "between", "groups", "suggesting", "that", "early",
    "intervention", "reduces", "severity", "of", "disease", "progression",
];

const JOURNALS: &[&str] = &[
    // Big venues repeated so their counts dominate the top-10 ranking.
    "The Lancet", "The Lancet", "The Lancet",
    "BMJ", "BMJ",
    "Nature Medicine", "Nature Medicine",
    "PLoS One", "PLoS One", "PLoS One", "PLoS One",
    "Journal of Virology", "Journal of Virology",
    "Emerging Infectious Diseases",
    "Clinical Infectious Diseases",
    "Eurosurveillance",
    "Cell Host & Microbe",
    "Viruses",
    "Epidemiology & Infection",
    "Vaccine",
    "JAMA",
    "NEJM", "NEJM",
];

const SOURCES: &[&str] = &["PMC", "Elsevier", "WHO", "medRxiv", "bioRxiv", "ArXiv"];

const ODD_DATES: &[&str] = &["n.d.", "Spring 2020", "forthcoming", "2020-15-99"];

fn words(rng: &mut SimpleRng, pool: &[&str], n: u64) -> String {
    (0..n)
        .map(|_| *rng.pick(pool))
        .collect::<Vec<_>>()
        .join(" ")
}

fn publish_time(rng: &mut SimpleRng) -> String {
    if rng.chance(0.05) {
        return String::new();
    }
    if rng.chance(0.08) {
        return rng.pick(ODD_DATES).to_string();
    }
    let year = rng.range(2018, 2023);
    if rng.chance(0.1) {
        // Year-only entries, common in the upstream dumps.
        return year.to_string();
    }
    let month = rng.range(1, 12);
    let day = rng.range(1, 28);
    format!("{year}-{month:02}-{day:02}")
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_rows = 250;

    let output_path = "metadata.csv";
    let mut writer = Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["title", "abstract", "journal", "publish_time", "source_x"])
        .expect("Failed to write header");

    for _ in 0..n_rows {
        let title = if rng.chance(0.05) {
            String::new()
        } else {
            let n = rng.range(4, 8);
            words(&mut rng, TITLE_WORDS, n)
        };
        let abstract_text = if rng.chance(0.15) {
            String::new()
        } else {
            let n = rng.range(20, 60);
            words(&mut rng, ABSTRACT_WORDS, n)
        };
        let journal = if rng.chance(0.1) {
            String::new()
        } else {
            rng.pick(JOURNALS).to_string()
        };
        let source = if rng.chance(0.1) {
            String::new()
        } else {
            rng.pick(SOURCES).to_string()
        };

        writer
            .write_record([
                title,
                abstract_text,
                journal,
                publish_time(&mut rng),
                source,
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} papers to {output_path}");
}
