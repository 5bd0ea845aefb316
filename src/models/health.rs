#[derive(Debug, Serialize, Deserialize)]
pub struct HealthV1 {
    pub ok: bool,
}

json_responder!(HealthV1);
