use chrono::NaiveDate;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Data de calendário tolerante ao formato do backend.
///
/// O backend serializa datas de três formas diferentes dependendo do
/// endpoint: string `"YYYY-MM-DD"` (às vezes com sufixo de hora), array
/// numérico `[ano, mes, dia]` ou datetime RFC3339. As três normalizam para o
/// mesmo `NaiveDate`, e a igualdade é sempre igualdade de data de calendário.
///
/// A tolerância fica concentrada aqui, na borda serde; a lógica de negócio
/// trabalha só com `NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlexDate(pub NaiveDate);

impl FlexDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for FlexDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl PartialEq<NaiveDate> for FlexDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.0 == *other
    }
}

/// Formas aceitas no wire antes da normalização.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Texto(String),
    Numeros(Vec<i64>),
}

fn parse_texto(texto: &str) -> Option<NaiveDate> {
    // "2024-06-03", "2024-06-03T14:00:00Z", "2024-06-03 14:00:00"
    let parte_data = texto
        .split('T')
        .next()
        .and_then(|s| s.split(' ').next())
        .unwrap_or(texto);
    NaiveDate::parse_from_str(parte_data, "%Y-%m-%d").ok()
}

fn parse_numeros(valores: &[i64]) -> Option<NaiveDate> {
    if valores.len() != 3 {
        return None;
    }
    NaiveDate::from_ymd_opt(valores[0] as i32, valores[1] as u32, valores[2] as u32)
}

impl<'de> Deserialize<'de> for FlexDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDate::deserialize(deserializer)?;
        let data = match &raw {
            RawDate::Texto(texto) => parse_texto(texto)
                .ok_or_else(|| D::Error::custom(format!("data inválida: {:?}", texto)))?,
            RawDate::Numeros(valores) => parse_numeros(valores).ok_or_else(|| {
                D::Error::custom(format!("data inválida: {:?}", valores))
            })?,
        };
        Ok(FlexDate(data))
    }
}

impl Serialize for FlexDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dia(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn aceita_string_iso() {
        let d: FlexDate = serde_json::from_str("\"2024-06-03\"").unwrap();
        assert_eq!(d.date(), dia(2024, 6, 3));
    }

    #[test]
    fn aceita_datetime() {
        let d: FlexDate = serde_json::from_str("\"2024-06-03T08:30:00Z\"").unwrap();
        assert_eq!(d.date(), dia(2024, 6, 3));
    }

    #[test]
    fn aceita_array_numerico() {
        let d: FlexDate = serde_json::from_str("[2024, 6, 3]").unwrap();
        assert_eq!(d.date(), dia(2024, 6, 3));
    }

    #[test]
    fn tres_formas_sao_iguais() {
        let a: FlexDate = serde_json::from_str("\"2024-06-03\"").unwrap();
        let b: FlexDate = serde_json::from_str("[2024, 6, 3]").unwrap();
        let c: FlexDate = serde_json::from_str("\"2024-06-03T00:00:00Z\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, dia(2024, 6, 3));
    }

    #[test]
    fn rejeita_formas_invalidas() {
        assert!(serde_json::from_str::<FlexDate>("\"03/06/2024\"").is_err());
        assert!(serde_json::from_str::<FlexDate>("[2024, 6]").is_err());
        assert!(serde_json::from_str::<FlexDate>("[2024, 13, 40]").is_err());
    }

    #[test]
    fn serializa_como_string_iso() {
        let json = serde_json::to_string(&FlexDate::new(dia(2024, 6, 3))).unwrap();
        assert_eq!(json, "\"2024-06-03\"");
    }
}
