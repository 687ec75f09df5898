//! Parameter endpoints of the external audio engine
//!
//! Pure data describing the engine's parameter channel: which keys exist,
//! what they mean, which value kind each carries and which way it flows. The
//! host validates every send against this table.

use std::fmt;

/// Value kind accepted by an endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValueKind {
    Int,
    Float,
    Bool,
}

/// Which side writes the endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    /// Host to engine
    Outbound,
    /// Engine to host
    Inbound,
}

/// One row of the contract table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EndpointSpec {
    pub key: &'static str,
    pub meaning: &'static str,
    pub kind: ValueKind,
    pub direction: Direction,
}

/// The engine contract. `pattern{n}` stands for one key per track.
pub const ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec {
        key: "pattern{n}",
        meaning: "Step bitmask of track n (bit i = step i)",
        kind: ValueKind::Int,
        direction: Direction::Outbound,
    },
    EndpointSpec {
        key: "tempo",
        meaning: "Tempo in beats per minute",
        kind: ValueKind::Float,
        direction: Direction::Outbound,
    },
    EndpointSpec {
        key: "playing",
        meaning: "Transport running",
        kind: ValueKind::Bool,
        direction: Direction::Outbound,
    },
    EndpointSpec {
        key: "steps",
        meaning: "Global step count of one cycle",
        kind: ValueKind::Int,
        direction: Direction::Outbound,
    },
    EndpointSpec {
        key: "currentStep",
        meaning: "Step index the engine is playing",
        kind: ValueKind::Int,
        direction: Direction::Inbound,
    },
];

/// A concrete engine endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Pattern(usize),
    Tempo,
    Playing,
    Steps,
    CurrentStep,
}

impl Endpoint {
    /// Contract row for this endpoint
    pub fn spec(&self) -> &'static EndpointSpec {
        match self {
            Endpoint::Pattern(_) => &ENDPOINTS[0],
            Endpoint::Tempo => &ENDPOINTS[1],
            Endpoint::Playing => &ENDPOINTS[2],
            Endpoint::Steps => &ENDPOINTS[3],
            Endpoint::CurrentStep => &ENDPOINTS[4],
        }
    }

    /// Wire key, e.g. `pattern3` or `tempo`
    pub fn key(&self) -> String {
        match self {
            Endpoint::Pattern(track) => format!("pattern{}", track),
            other => other.spec().key.to_string(),
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.spec().kind
    }

    pub fn direction(&self) -> Direction {
        self.spec().direction
    }

    /// Parse a wire key back into an endpoint
    pub fn parse(key: &str) -> Option<Self> {
        if let Some(track) = key.strip_prefix("pattern") {
            return track.parse().ok().map(Endpoint::Pattern);
        }
        match key {
            "tempo" => Some(Endpoint::Tempo),
            "playing" => Some(Endpoint::Playing),
            "steps" => Some(Endpoint::Steps),
            "currentStep" => Some(Endpoint::CurrentStep),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A value travelling over the parameter channel
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ParamValue::Int(_) => ValueKind::Int,
            ParamValue::Float(_) => ValueKind::Float,
            ParamValue::Bool(_) => ValueKind::Bool,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{:.1}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(Endpoint::Pattern(0).key(), "pattern0");
        assert_eq!(Endpoint::Pattern(7).key(), "pattern7");
        assert_eq!(Endpoint::Tempo.key(), "tempo");
        assert_eq!(Endpoint::Playing.key(), "playing");
        assert_eq!(Endpoint::Steps.key(), "steps");
        assert_eq!(Endpoint::CurrentStep.key(), "currentStep");
    }

    #[test]
    fn test_parse_round_trip() {
        for endpoint in [
            Endpoint::Pattern(3),
            Endpoint::Tempo,
            Endpoint::Playing,
            Endpoint::Steps,
            Endpoint::CurrentStep,
        ] {
            assert_eq!(Endpoint::parse(&endpoint.key()), Some(endpoint));
        }
        assert_eq!(Endpoint::parse("patternX"), None);
        assert_eq!(Endpoint::parse("volume"), None);
    }

    #[test]
    fn test_contract() {
        assert_eq!(Endpoint::Pattern(1).kind(), ValueKind::Int);
        assert_eq!(Endpoint::Tempo.kind(), ValueKind::Float);
        assert_eq!(Endpoint::Playing.kind(), ValueKind::Bool);
        assert_eq!(Endpoint::CurrentStep.direction(), Direction::Inbound);
        assert_eq!(Endpoint::Steps.direction(), Direction::Outbound);
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(ParamValue::Int(3).kind(), ValueKind::Int);
        assert_eq!(ParamValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ParamValue::Float(120.0).as_int(), None);
        assert_eq!(ParamValue::Float(120.0).to_string(), "120.0");
    }
}
