use serde::{Deserialize, Serialize};

/// A single row of the airline on-time performance dataset.
///
/// Field names map to the column headers of the BTS reporting CSV via serde
/// renames; columns not listed here are ignored during deserialization.
/// Delay columns are optional because the dataset leaves them blank for
/// flights that were not delayed in that category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Calendar year of the flight
    #[serde(rename = "Year")]
    pub year: i32,
    /// Calendar month, 1-12
    #[serde(rename = "Month")]
    pub month: u32,
    /// Reporting airline carrier code (e.g. "AA", "DL")
    #[serde(rename = "Reporting_Airline")]
    pub reporting_airline: String,
    /// Destination state code (e.g. "CA", "TX")
    #[serde(rename = "DestState")]
    pub dest_state: String,
    /// Arrival delay in minutes; absent when not reported
    #[serde(rename = "ArrDelay")]
    pub arr_delay: Option<f64>,
    /// Flight count for this row (the dataset stores it as a float)
    #[serde(rename = "Flights")]
    pub flights: Option<f64>,
    /// Minutes of delay attributed to the carrier
    #[serde(rename = "CarrierDelay")]
    pub carrier_delay: Option<f64>,
    /// Minutes of delay attributed to weather
    #[serde(rename = "WeatherDelay")]
    pub weather_delay: Option<f64>,
    /// Minutes of delay attributed to the National Airspace System
    #[serde(rename = "NASDelay")]
    pub nas_delay: Option<f64>,
    /// Minutes of delay attributed to security
    #[serde(rename = "SecurityDelay")]
    pub security_delay: Option<f64>,
    /// Minutes of delay attributed to a late inbound aircraft
    #[serde(rename = "LateAircraftDelay")]
    pub late_aircraft_delay: Option<f64>,
    /// First diversion airport code; alphanumeric, never numerically coerced
    #[serde(rename = "Div1Airport", default)]
    pub div1_airport: Option<String>,
    /// First diversion tail number; alphanumeric, never numerically coerced
    #[serde(rename = "Div1TailNum", default)]
    pub div1_tail_num: Option<String>,
    /// Second diversion airport code
    #[serde(rename = "Div2Airport", default)]
    pub div2_airport: Option<String>,
    /// Second diversion tail number
    #[serde(rename = "Div2TailNum", default)]
    pub div2_tail_num: Option<String>,
}

impl FlightRecord {
    /// Creates a record with the fields the aggregations use; diversion
    /// columns are left empty. Intended for tests and fixtures.
    pub fn new(
        year: i32,
        month: u32,
        reporting_airline: impl Into<String>,
        dest_state: impl Into<String>,
        arr_delay: Option<f64>,
        flights: Option<f64>,
    ) -> Self {
        FlightRecord {
            year,
            month,
            reporting_airline: reporting_airline.into(),
            dest_state: dest_state.into(),
            arr_delay,
            flights,
            carrier_delay: None,
            weather_delay: None,
            nas_delay: None,
            security_delay: None,
            late_aircraft_delay: None,
            div1_airport: None,
            div1_tail_num: None,
            div2_airport: None,
            div2_tail_num: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_construction() {
        let record = FlightRecord::new(2010, 3, "AA", "CA", Some(12.0), Some(1.0));
        assert_eq!(record.year, 2010);
        assert_eq!(record.month, 3);
        assert_eq!(record.reporting_airline, "AA");
        assert_eq!(record.dest_state, "CA");
        assert_eq!(record.arr_delay, Some(12.0));
        assert!(record.carrier_delay.is_none());
    }

    #[test]
    fn test_record_deserializes_from_csv_row() {
        let data = "Year,Month,Reporting_Airline,DestState,ArrDelay,Flights,\
                    CarrierDelay,WeatherDelay,NASDelay,SecurityDelay,LateAircraftDelay,\
                    Div1Airport,Div1TailNum,Div2Airport,Div2TailNum\n\
                    2010,1,AA,CA,15,1,3,,7,0,5,,N123AA,,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let record: FlightRecord = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(record.year, 2010);
        assert_eq!(record.month, 1);
        assert_eq!(record.arr_delay, Some(15.0));
        assert_eq!(record.weather_delay, None);
        assert_eq!(record.div1_tail_num.as_deref(), Some("N123AA"));
    }

    #[test]
    fn test_record_ignores_unknown_columns() {
        let data = "Year,Month,Reporting_Airline,DestState,ArrDelay,Flights,TailNumber\n\
                    2012,6,DL,TX,,1,N987DL\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let record: FlightRecord = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(record.year, 2012);
        assert_eq!(record.reporting_airline, "DL");
        assert_eq!(record.arr_delay, None);
    }
}
