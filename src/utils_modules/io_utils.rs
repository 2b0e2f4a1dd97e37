use crate::common::*;

#[doc = "toml 파일을 읽어서 객체로 변환해주는 함수"]
/// # Arguments
/// * `file_path` - 읽을 대상 toml 파일이 존재하는 경로
///
/// # Returns
/// * Result<T, anyhow::Error>
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .map_err(|e| anyhow!("[read_toml_from_file] cannot read '{}': {:?}", file_path, e))?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}
