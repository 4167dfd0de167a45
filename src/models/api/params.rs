use serde::Deserialize;

// Query string for `/` and `GET /api/estimate`
#[derive(Debug, Default, Deserialize)]
pub struct EstimateParams {
    pub club: Option<String>,
    pub yards: Option<String>,
}

// Body for `POST /api/estimate`, yards may arrive as text or as a number
#[derive(Debug, Default, Deserialize)]
pub struct EstimateBody {
    pub club: Option<String>,
    pub yards: Option<RawYardage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawYardage {
    Text(String),
    Number(serde_json::Number),
}

impl From<EstimateBody> for EstimateParams {
    fn from(body: EstimateBody) -> Self {
        EstimateParams {
            club: body.club,
            yards: body.yards.map(|yards| match yards {
                RawYardage::Text(text) => text,
                RawYardage::Number(number) => number.to_string(),
            }),
        }
    }
}
