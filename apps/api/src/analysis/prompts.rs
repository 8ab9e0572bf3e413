//! All prompt text for the four analysis modes.
//!
//! The JSON example inside each template is the output contract: the
//! Normalizer parses exactly the fields shown there. Adding a field to a
//! model in `models.rs` requires the matching example here to change in the
//! same commit, and vice versa.
//!
//! Content is pt-BR end to end — the product ships in Brazilian Portuguese
//! and the model is instructed to answer in it.

use crate::analysis::models::Sport;

/// System instruction shared by every mode: the M6A rubric, the scoring
/// rules, and the JSON formatting rules. The single-quote rule exists
/// because unescaped double quotes inside string values are the most common
/// way the model breaks its own JSON.
pub const M6A_SYSTEM: &str = r#"PAPEL: Você é um Analista de Dados Esportivos de Elite implementando o "Framework M6A" (Modelo de 6 Atributos).
OBJETIVO: Quantificar performance (0-100) baseado em evidências estatísticas, removendo subjetividade.

OS 6 ATRIBUTOS E MÉTRICAS POR ESPORTE:

[FUTEBOL]
1. Defesa: Desarmes, Interceptações, Duelos Aéreos.
2. Ataque: xG, Gols, Assistências, SCA.
3. Físico: Distância percorrida, Velocidade, Lesões.

[BASQUETE]
1. Defesa: Defensive Rating, Tocos, Roubos.
2. Ataque: TS%, Pontos/Jogo, Assistências.
3. Físico: Minutagem, Explosão.

[VÔLEI]
1. Defesa: Digs (Manchete), Recepção (Passe A/B), Bloqueios.
2. Ataque: % de Ataque (Virada de bola), Aces, Pontos por set.
3. Físico: Altura de alcance, Salto vertical, Resistência.

[GERAL - TODOS OS ESPORTES]
4. Mentalidade: Clutch (pontos decisivos), Disciplina, Liderança.
5. Técnica: Qualidade do fundamento (Passe, Toque, Mecânica).
6. Talento: Valor de Mercado, Potencial Futuro, "Fator X".

REGRAS DE FORMATAÇÃO (JSON CRÍTICO):
1. Responda APENAS com um JSON válido.
2. IMPORTANTE: NÃO use aspas duplas (") dentro dos valores de texto (strings). Isso quebra a sintaxe do JSON.
   - ERRADO: "justificativa": "O jogador é "clutch" em finais."
   - CORRETO: "justificativa": "O jogador é 'clutch' em finais."
3. Use aspas simples (') para ênfase, apelidos ou citações dentro das strings.

REGRAS GERAIS:
- Intervalo: 0-100.
- Contexto: Data Atual (Tempo Real). Verifique status do elenco (lesões, transferências) usando a PESQUISA DO GOOGLE.
- Tom: Analítico mas com gírias leves do esporte ("Resenha de alto nível").
- Idioma: Português do Brasil."#;

/// Single-entity analysis. Replace `{sport}` and `{query}` before sending.
const ENTITY_PROMPT_TEMPLATE: &str = r#"Analise a seguinte entidade de {sport} (Jogador ou Time): "{query}".
Forneça uma análise detalhada M6A com justificativas métricas específicas.
Use o Google Search para encontrar estatísticas recentes e uma URL de imagem representativa.

ATENÇÃO: Responda EXCLUSIVAMENTE com um JSON válido. Evite aspas duplas dentro dos textos (use aspas simples).

Formato esperado:
{
  "entityName": "Nome",
  "role": "Posição ou 'Time'",
  "team": "Time Atual",
  "age": 25 (se jogador),
  "imageUrl": "URL da imagem encontrada (priorize imagens oficiais ou de veículos de imprensa)",
  "overallScore": 85,
  "attributes": {
    "defense": 80, "attack": 80, "physical": 80, "mentality": 80, "technique": 80, "talent": 80
  },
  "justification": "Texto em markdown detalhado... use aspas simples para 'citações'.",
  "keyMetrics": ["xG: 0.5", "Passes: 90%"]
}"#;

/// Head-to-head comparison. Replace `{sport}`, `{player_a}`, `{player_b}`.
const COMPARISON_PROMPT_TEMPLATE: &str = r#"Realize uma COMPARAÇÃO DIRETA (Head-to-Head) entre os jogadores de {sport}: "{player_a}" vs "{player_b}".
Use o Google Search para encontrar estatísticas recentes e imagens para AMBOS.
Determine quem é melhor no geral e compare atributo por atributo.

ATENÇÃO: Responda EXCLUSIVAMENTE com um JSON válido. Evite aspas duplas dentro dos textos.

Formato esperado:
{
  "playerA": {
    "entityName": "Nome A",
    "role": "Posição",
    "team": "Time A",
    "imageUrl": "URL Imagem A",
    "overallScore": 85,
    "attributes": { "defense": 0, "attack": 0, "physical": 0, "mentality": 0, "technique": 0, "talent": 0 },
    "keyMetrics": ["Stat 1", "Stat 2"]
  },
  "playerB": {
    "entityName": "Nome B",
    "role": "Posição",
    "team": "Time B",
    "imageUrl": "URL Imagem B",
    "overallScore": 82,
    "attributes": { "defense": 0, "attack": 0, "physical": 0, "mentality": 0, "technique": 0, "talent": 0 },
    "keyMetrics": ["Stat 1", "Stat 2"]
  },
  "winner": "Nome do Vencedor",
  "comparisonAnalysis": "Texto em markdown comparando os pontos fortes e fracos de cada um. Explique por que o vencedor ganhou. Use aspas simples."
}"#;

/// Matchup prediction. Replace `{sport}`, `{team_a}`, `{team_b}`.
const MATCHUP_PROMPT_TEMPLATE: &str = r#"Analise um confronto hipotético entre {team_a} e {team_b} no {sport}.
Compare seus atributos M6A e preveja o resultado baseado em encaixe tático e força estatística.
Use o Google Search para verificar forma recente, desfalques e imagens dos times.

ATENÇÃO: Responda EXCLUSIVAMENTE com um JSON válido.

Formato esperado:
{
  "teamA": { "entityName": "Nome A", "imageUrl": "URL Logo A", "overallScore": 0, "attributes": { "defense": 0, "attack": 0, "physical": 0, "mentality": 0, "technique": 0, "talent": 0 } },
  "teamB": { "entityName": "Nome B", "imageUrl": "URL Logo B", "overallScore": 0, "attributes": { "defense": 0, "attack": 0, "physical": 0, "mentality": 0, "technique": 0, "talent": 0 } },
  "predictedScore": "2-1",
  "analysis": "Análise detalhada em markdown... use aspas simples para 'citações'."
}"#;

/// Scouting recommendation. Replace `{sport}`, `{team}`, `{problem_area}`.
const SCOUT_PROMPT_TEMPLATE: &str = r#"O time de {sport} "{team}" tem uma fraqueza em "{problem_area}".
Identifique o atributo específico necessário para corrigir isso.
Sugira uma contratação realista (financeiramente e contratualmente viável) que tenha nota Elite (90+) nesse atributo.
Use o Google Search para validar valores de mercado, contratos e buscar imagem do jogador.

ATENÇÃO: Responda EXCLUSIVAMENTE com um JSON válido.

Formato esperado:
{
  "targetAttribute": "Atributo Alvo",
  "suggestedPlayer": "Nome do Jogador",
  "imageUrl": "URL de imagem do jogador",
  "currentTeam": "Time Atual",
  "reasoning": "Justificativa em markdown... use aspas simples para 'citações'.",
  "viabilityScore": 85
}"#;

pub fn entity_prompt(query: &str, sport: Sport) -> String {
    ENTITY_PROMPT_TEMPLATE
        .replace("{sport}", sport.label())
        .replace("{query}", query)
}

pub fn comparison_prompt(player_a: &str, player_b: &str, sport: Sport) -> String {
    COMPARISON_PROMPT_TEMPLATE
        .replace("{sport}", sport.label())
        .replace("{player_a}", player_a)
        .replace("{player_b}", player_b)
}

pub fn matchup_prompt(team_a: &str, team_b: &str, sport: Sport) -> String {
    MATCHUP_PROMPT_TEMPLATE
        .replace("{sport}", sport.label())
        .replace("{team_a}", team_a)
        .replace("{team_b}", team_b)
}

pub fn scout_prompt(team: &str, problem_area: &str, sport: Sport) -> String {
    SCOUT_PROMPT_TEMPLATE
        .replace("{sport}", sport.label())
        .replace("{team}", team)
        .replace("{problem_area}", problem_area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_prompt_embeds_query_and_sport() {
        let prompt = entity_prompt("Neymar Jr", Sport::Football);
        assert!(prompt.contains("\"Neymar Jr\""));
        assert!(prompt.contains("Futebol"));
        assert!(!prompt.contains("{query}"));
        assert!(!prompt.contains("{sport}"));
    }

    /// Every field the entity parser expects must appear in the schema
    /// example, keeping prompt and parser in lockstep.
    #[test]
    fn test_entity_prompt_schema_example_is_complete() {
        let prompt = entity_prompt("x", Sport::Basketball);
        for field in [
            "entityName",
            "role",
            "team",
            "age",
            "imageUrl",
            "overallScore",
            "attributes",
            "defense",
            "attack",
            "physical",
            "mentality",
            "technique",
            "talent",
            "justification",
            "keyMetrics",
        ] {
            assert!(prompt.contains(field), "missing schema field: {field}");
        }
    }

    #[test]
    fn test_comparison_prompt_embeds_both_players() {
        let prompt = comparison_prompt("Messi", "Cristiano Ronaldo", Sport::Football);
        assert!(prompt.contains("\"Messi\""));
        assert!(prompt.contains("\"Cristiano Ronaldo\""));
        assert!(prompt.contains("playerA"));
        assert!(prompt.contains("playerB"));
        assert!(prompt.contains("winner"));
        assert!(prompt.contains("comparisonAnalysis"));
    }

    #[test]
    fn test_matchup_prompt_embeds_teams_and_score_field() {
        let prompt = matchup_prompt("Flamengo", "Palmeiras", Sport::Football);
        assert!(prompt.contains("Flamengo"));
        assert!(prompt.contains("Palmeiras"));
        assert!(prompt.contains("teamA"));
        assert!(prompt.contains("teamB"));
        assert!(prompt.contains("predictedScore"));
        assert!(prompt.contains("analysis"));
    }

    #[test]
    fn test_scout_prompt_embeds_team_and_weakness() {
        let prompt = scout_prompt("Santos", "defesa frágil em bolas aéreas", Sport::Football);
        assert!(prompt.contains("\"Santos\""));
        assert!(prompt.contains("defesa frágil em bolas aéreas"));
        assert!(prompt.contains("targetAttribute"));
        assert!(prompt.contains("suggestedPlayer"));
        assert!(prompt.contains("currentTeam"));
        assert!(prompt.contains("viabilityScore"));
    }

    #[test]
    fn test_system_instruction_covers_all_three_sports() {
        assert!(M6A_SYSTEM.contains("[FUTEBOL]"));
        assert!(M6A_SYSTEM.contains("[BASQUETE]"));
        assert!(M6A_SYSTEM.contains("[VÔLEI]"));
        assert!(M6A_SYSTEM.contains("aspas simples"));
    }
}
