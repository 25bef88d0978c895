use crate::hnap::domain::lenient_deserializer::{from_object, nullable_string, object};
use serde::Deserialize;
use serde_json::{Map, Value};

// Every leaf value is a string on the wire, frequencies and uptimes included.
// Absent objects and fields decode to their empty defaults.

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModemStatusEnvelope {
    #[serde(rename = "GetMultipleHNAPsResponse", deserialize_with = "object")]
    pub multiple_hnaps_response: MultipleHnapsResponse,
}

impl ModemStatusEnvelope {
    /// Decodes a response body, which must start with a JSON object (or `null`).
    ///
    /// Only the first JSON value is read; anything the modem appends after it is ignored.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        match Option::<Map<String, Value>>::deserialize(&mut deserializer)? {
            Some(map) => from_object(map),
            None => Ok(Self::default()),
        }
    }

    pub fn downstream_channel(&self) -> &str {
        &self.multiple_hnaps_response.downstream_channel_info_response.downstream_channel
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MultipleHnapsResponse {
    #[serde(rename = "GetMotoStatusStartupSequenceResponse", deserialize_with = "object")]
    pub startup_sequence_response: StartupSequenceResponse,
    #[serde(rename = "GetMotoStatusConnectionInfoResponse", deserialize_with = "object")]
    pub connection_info_response: ConnectionInfoResponse,
    #[serde(rename = "GetMotoStatusDownstreamChannelInfoResponse", deserialize_with = "object")]
    pub downstream_channel_info_response: DownstreamChannelInfoResponse,
    #[serde(rename = "GetMotoStatusUpstreamChannelInfoResponse", deserialize_with = "object")]
    pub upstream_channel_info_response: UpstreamChannelInfoResponse,
    #[serde(rename = "GetMotoLagStatusResponse", deserialize_with = "object")]
    pub lag_status_response: LagStatusResponse,
    #[serde(rename = "GetMultipleHNAPsResult", deserialize_with = "nullable_string")]
    pub result: String,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StartupSequenceResponse {
    #[serde(rename = "MotoConnDSFreq", deserialize_with = "nullable_string")]
    pub downstream_freq: String,
    #[serde(rename = "MotoConnDSComment", deserialize_with = "nullable_string")]
    pub downstream_comment: String,
    #[serde(rename = "MotoConnConnectivityStatus", deserialize_with = "nullable_string")]
    pub connectivity_status: String,
    #[serde(rename = "MotoConnConnectivityComment", deserialize_with = "nullable_string")]
    pub connectivity_comment: String,
    #[serde(rename = "MotoConnBootStatus", deserialize_with = "nullable_string")]
    pub boot_status: String,
    #[serde(rename = "MotoConnBootComment", deserialize_with = "nullable_string")]
    pub boot_comment: String,
    #[serde(rename = "MotoConnConfigurationFileStatus", deserialize_with = "nullable_string")]
    pub configuration_file_status: String,
    #[serde(rename = "MotoConnConfigurationFileComment", deserialize_with = "nullable_string")]
    pub configuration_file_comment: String,
    #[serde(rename = "MotoConnSecurityStatus", deserialize_with = "nullable_string")]
    pub security_status: String,
    #[serde(rename = "MotoConnSecurityComment", deserialize_with = "nullable_string")]
    pub security_comment: String,
    #[serde(rename = "GetMotoStatusStartupSequenceResult", deserialize_with = "nullable_string")]
    pub result: String,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConnectionInfoResponse {
    #[serde(rename = "MotoConnSystemUpTime", deserialize_with = "nullable_string")]
    pub system_up_time: String,
    #[serde(rename = "MotoConnNetworkAccess", deserialize_with = "nullable_string")]
    pub network_access: String,
    #[serde(rename = "GetMotoStatusConnectionInfoResult", deserialize_with = "nullable_string")]
    pub result: String,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DownstreamChannelInfoResponse {
    #[serde(rename = "MotoConnDownstreamChannel", deserialize_with = "nullable_string")]
    pub downstream_channel: String,
    #[serde(rename = "GetMotoStatusDownstreamChannelInfoResult", deserialize_with = "nullable_string")]
    pub result: String,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpstreamChannelInfoResponse {
    #[serde(rename = "MotoConnUpstreamChannel", deserialize_with = "nullable_string")]
    pub upstream_channel: String,
    #[serde(rename = "GetMotoStatusUpstreamChannelInfoResult", deserialize_with = "nullable_string")]
    pub result: String,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LagStatusResponse {
    #[serde(rename = "MotoLagCurrentStatus", deserialize_with = "nullable_string")]
    pub current_status: String,
    #[serde(rename = "GetMotoLagStatusResult", deserialize_with = "nullable_string")]
    pub result: String,
}
