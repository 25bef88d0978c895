use serde::Serialize;

pub const SOAP_ACTION_HEADER: &str = "SOAPACTION";
pub const GET_MULTIPLE_HNAPS_ACTION: &str = "http://purenetworks.com/HNAP1/GetMultipleHNAPs";

/// Multiplexed HNAP call asking the modem for all status sections at once.
#[derive(Debug, Serialize)]
pub struct GetMultipleHnapsRequest {
    #[serde(rename = "GetMultipleHNAPs")]
    pub get_multiple_hnaps: MotoStatusQueries,
}

// An empty string means "no parameters" for the sub-query.
#[derive(Debug, Serialize)]
pub struct MotoStatusQueries {
    #[serde(rename = "GetMotoStatusStartupSequence")]
    pub startup_sequence: &'static str,
    #[serde(rename = "GetMotoStatusConnectionInfo")]
    pub connection_info: &'static str,
    #[serde(rename = "GetMotoStatusDownstreamChannelInfo")]
    pub downstream_channel_info: &'static str,
    #[serde(rename = "GetMotoStatusUpstreamChannelInfo")]
    pub upstream_channel_info: &'static str,
    #[serde(rename = "GetMotoLagStatus")]
    pub lag_status: &'static str,
}

impl GetMultipleHnapsRequest {
    pub const fn moto_status() -> Self {
        GetMultipleHnapsRequest {
            get_multiple_hnaps: MotoStatusQueries {
                startup_sequence: "",
                connection_info: "",
                downstream_channel_info: "",
                upstream_channel_info: "",
                lag_status: "",
            },
        }
    }
}
