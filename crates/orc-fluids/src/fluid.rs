//! Working fluid definitions.

use std::fmt;

/// Working fluids suitable for (organic) Rankine cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkingFluid {
    /// Carbon dioxide (CO₂)
    #[default]
    CO2,
    /// Refrigerant R134a
    R134a,
    /// Refrigerant R152a
    R152a,
    /// Refrigerant R245fa
    R245fa,
    /// Refrigerant R1234yf
    R1234yf,
    /// Propane
    Propane,
    /// n-Butane
    NButane,
    /// Isobutane
    Isobutane,
    /// n-Pentane
    NPentane,
    /// Isopentane
    Isopentane,
    /// n-Hexane
    NHexane,
    /// Ammonia (NH₃)
    Ammonia,
    /// Water (H₂O)
    Water,
}

impl WorkingFluid {
    pub const ALL: [WorkingFluid; 13] = [
        WorkingFluid::CO2,
        WorkingFluid::R134a,
        WorkingFluid::R152a,
        WorkingFluid::R245fa,
        WorkingFluid::R1234yf,
        WorkingFluid::Propane,
        WorkingFluid::NButane,
        WorkingFluid::Isobutane,
        WorkingFluid::NPentane,
        WorkingFluid::Isopentane,
        WorkingFluid::NHexane,
        WorkingFluid::Ammonia,
        WorkingFluid::Water,
    ];

    /// Canonical short key, as written in config files and reports.
    pub fn key(&self) -> &'static str {
        match self {
            WorkingFluid::CO2 => "CO2",
            WorkingFluid::R134a => "R134a",
            WorkingFluid::R152a => "R152a",
            WorkingFluid::R245fa => "R245fa",
            WorkingFluid::R1234yf => "R1234yf",
            WorkingFluid::Propane => "Propane",
            WorkingFluid::NButane => "nButane",
            WorkingFluid::Isobutane => "Isobutane",
            WorkingFluid::NPentane => "nPentane",
            WorkingFluid::Isopentane => "Isopentane",
            WorkingFluid::NHexane => "nHexane",
            WorkingFluid::Ammonia => "NH3",
            WorkingFluid::Water => "H2O",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkingFluid::CO2 => "Carbon Dioxide",
            WorkingFluid::R134a => "R134a",
            WorkingFluid::R152a => "R152a",
            WorkingFluid::R245fa => "R245fa",
            WorkingFluid::R1234yf => "R1234yf",
            WorkingFluid::Propane => "Propane",
            WorkingFluid::NButane => "n-Butane",
            WorkingFluid::Isobutane => "Isobutane",
            WorkingFluid::NPentane => "n-Pentane",
            WorkingFluid::Isopentane => "Isopentane",
            WorkingFluid::NHexane => "n-Hexane",
            WorkingFluid::Ammonia => "Ammonia",
            WorkingFluid::Water => "Water",
        }
    }

    /// Get CoolProp fluid name for this fluid.
    pub fn coolprop_name(&self) -> &'static str {
        match self {
            WorkingFluid::CO2 => "CarbonDioxide",
            WorkingFluid::R134a => "R134a",
            WorkingFluid::R152a => "R152a",
            WorkingFluid::R245fa => "R245fa",
            WorkingFluid::R1234yf => "R1234yf",
            WorkingFluid::Propane => "n-Propane",
            WorkingFluid::NButane => "n-Butane",
            WorkingFluid::Isobutane => "Isobutane",
            WorkingFluid::NPentane => "n-Pentane",
            WorkingFluid::Isopentane => "Isopentane",
            WorkingFluid::NHexane => "n-Hexane",
            WorkingFluid::Ammonia => "Ammonia",
            WorkingFluid::Water => "Water",
        }
    }

    /// Map to rfluids Pure enum (internal use for CoolProp backend).
    pub(crate) fn rfluids_pure(&self) -> rfluids::substance::Pure {
        use rfluids::substance::Pure;
        match self {
            WorkingFluid::CO2 => Pure::CarbonDioxide,
            WorkingFluid::R134a => Pure::R134a,
            WorkingFluid::R152a => Pure::R152a,
            WorkingFluid::R245fa => Pure::R245fa,
            WorkingFluid::R1234yf => Pure::R1234yf,
            WorkingFluid::Propane => Pure::nPropane,
            WorkingFluid::NButane => Pure::nButane,
            WorkingFluid::Isobutane => Pure::Isobutane,
            WorkingFluid::NPentane => Pure::nPentane,
            WorkingFluid::Isopentane => Pure::Isopentane,
            WorkingFluid::NHexane => Pure::nHexane,
            WorkingFluid::Ammonia => Pure::Ammonia,
            WorkingFluid::Water => Pure::Water,
        }
    }
}

impl fmt::Display for WorkingFluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for WorkingFluid {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CO2" | "R744" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(WorkingFluid::CO2),
            "R134A" => Ok(WorkingFluid::R134a),
            "R152A" => Ok(WorkingFluid::R152a),
            "R245FA" => Ok(WorkingFluid::R245fa),
            "R1234YF" => Ok(WorkingFluid::R1234yf),
            "PROPANE" | "N-PROPANE" | "R290" | "C3H8" => Ok(WorkingFluid::Propane),
            "NBUTANE" | "N-BUTANE" | "BUTANE" | "R600" => Ok(WorkingFluid::NButane),
            "ISOBUTANE" | "I-BUTANE" | "R600A" => Ok(WorkingFluid::Isobutane),
            "NPENTANE" | "N-PENTANE" | "PENTANE" | "R601" => Ok(WorkingFluid::NPentane),
            "ISOPENTANE" | "I-PENTANE" | "R601A" => Ok(WorkingFluid::Isopentane),
            "NHEXANE" | "N-HEXANE" | "HEXANE" => Ok(WorkingFluid::NHexane),
            "NH3" | "AMMONIA" | "R717" => Ok(WorkingFluid::Ammonia),
            "H2O" | "WATER" | "R718" => Ok(WorkingFluid::Water),
            _ => Err("unknown working fluid"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WorkingFluid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WorkingFluid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown working fluid '{raw}'")))
    }
}
