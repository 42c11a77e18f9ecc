//! Circular cursor turning genes into normalized decision values.

use super::MAX_GENE;

/// Infinite, restartable stream of values in `[0, 1]`.
///
/// Each step yields `gene / (GENE_STATES - 1)` and advances one locus,
/// wrapping to the start after the last gene. The domain pulls as many
/// values as it needs. An empty genome yields nothing.
///
/// ```
/// use meal_evolve::genome::Genome;
///
/// let genome = Genome::from_genes(vec![0, 15, 5]);
/// let values: Vec<f64> = genome.decoder().take(4).collect();
/// assert_eq!(values, vec![0.0, 1.0, 5.0 / 15.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    genes: &'a [u8],
    position: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(genes: &'a [u8]) -> Self {
        Self { genes, position: 0 }
    }

    /// Locus the next value will be read from.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Restarts from the first gene.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Next value mapped to one of `count` discrete choices.
    ///
    /// Returns `None` for an empty genome or `count == 0`.
    pub fn next_choice(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let value = self.next()?;
        Some(((value * count as f64) as usize).min(count - 1))
    }

    /// Next value scaled linearly into `[low, high]`.
    pub fn next_in_range(&mut self, low: f64, high: f64) -> Option<f64> {
        self.next().map(|v| low + v * (high - low))
    }
}

impl Iterator for Decoder<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let gene = *self.genes.get(self.position)?;
        self.position = (self.position + 1) % self.genes.len();
        Some(f64::from(gene) / f64::from(MAX_GENE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_around() {
        let genes = [15, 0];
        let values: Vec<f64> = Decoder::new(&genes).take(5).collect();
        assert_eq!(values, vec![1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_reset_restarts() {
        let genes = [3, 6, 9];
        let mut d = Decoder::new(&genes);
        d.next();
        d.next();
        assert_eq!(d.position(), 2);
        d.reset();
        assert_eq!(d.position(), 0);
        assert_eq!(d.next(), Some(3.0 / 15.0));
    }

    #[test]
    fn test_empty_genome_yields_nothing() {
        let mut d = Decoder::new(&[]);
        assert_eq!(d.next(), None);
        assert_eq!(d.next_choice(3), None);
    }

    #[test]
    fn test_next_choice() {
        let genes = [0, 7, 15];
        let mut d = Decoder::new(&genes);
        assert_eq!(d.next_choice(4), Some(0));
        assert_eq!(d.next_choice(4), Some(1));
        assert_eq!(d.next_choice(4), Some(3));
        assert_eq!(d.next_choice(0), None);
    }

    #[test]
    fn test_next_in_range() {
        let genes = [15, 0];
        let mut d = Decoder::new(&genes);
        assert_eq!(d.next_in_range(10.0, 20.0), Some(20.0));
        assert_eq!(d.next_in_range(10.0, 20.0), Some(10.0));
    }
}
