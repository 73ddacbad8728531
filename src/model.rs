use std::fmt;

use glam::DVec3;

/// One sample from a lines dump: a surface position and its normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub position: DVec3,
    pub normal: DVec3,
}

impl Record {
    pub fn new(position: DVec3, normal: DVec3) -> Record {
        Record { position, normal }
    }
}

/// One sample from a points dump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub DVec3);

// Both dumps write coordinates as `x,y,z`; records join two of them with `;`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", Point(self.position), Point(self.normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_record() {
        let record = Record::new(DVec3::new(1.0, -2.5, 0.125), DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(record.to_string(), "1,-2.5,0.125;0,1,0");
    }

    #[test]
    fn test_display_point() {
        let point = Point(DVec3::new(1e-7, 3.0, f64::NEG_INFINITY));
        assert_eq!(point.to_string(), "0.0000001,3,-inf");
    }
}
