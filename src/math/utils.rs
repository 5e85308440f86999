// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Unterhalb dieses Betrags gelten zwei Bisektoren als parallel.
    pub const DETERMINANT_EPSILON: f64 = 1e-10;
    /// Mindestrand bei automatisch bestimmten Clip-Grenzen.
    pub const MIN_BOUNDS_MARGIN: f64 = 1.0;
}

/// Hash- und Bucket-Hilfsfunktionen der Sweepline
pub mod buckets {
    /// Tabellengröße aus der Site-Anzahl: `floor(sqrt(n + 4))`.
    pub fn sqrt_site_count(site_count: usize) -> usize {
        ((site_count as f64) + 4.0).sqrt() as usize
    }

    /// Bildet `value` aus `[origin, origin + extent]` linear auf `0..bucket_count` ab.
    ///
    /// Werte außerhalb werden auf den ersten bzw. letzten Bucket geklemmt.
    /// Bei `extent <= 0` (alle Sites auf einer Linie) landet alles in Bucket 0.
    pub fn bucket_index(value: f64, origin: f64, extent: f64, bucket_count: usize) -> isize {
        if bucket_count == 0 || extent.is_nan() || extent <= 0.0 {
            return 0;
        }
        let raw = ((value - origin) / extent * bucket_count as f64) as isize;
        raw.clamp(0, bucket_count as isize - 1)
    }
}
