//! Chat assistant domain types and the fixed system instruction.
//!
//! The transport to the generative-language service lives in
//! `ecodrive-server`; this module only owns the conversation types, the
//! reference price table the prompt quotes, and the prompt text itself.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

pub const AGENCY_NAME: &str = "EcoDrive Agency";
pub const AGENCY_LOCATION: &str = "Jaraguá do Sul, SC";

/// Shown in place of the assistant reply on any proxy failure.
pub const FALLBACK_REPLY: &str = "Ocorreu um erro ao conectar com o assistente.";

/// Shown when the service answered but produced no text.
pub const EMPTY_REPLY: &str =
  "Desculpe, não consegui processar sua pergunta. Tente novamente.";

// ─── Conversation ────────────────────────────────────────────────────────────

/// Who authored a message. `Model` is the assistant side, matching the role
/// names of the generative-language wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
  User,
  Model,
}

/// One turn of the conversation. History is append-only and in-memory on the
/// client; nothing is persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role: ChatRole,
  pub text: String,
}

// ─── Reference price table ───────────────────────────────────────────────────

/// Price of a reference route, in whole reais or quote-on-request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePrice {
  Fixed(u32),
  OnRequest,
}

/// One row of the public reference price table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
  pub destination: &'static str,
  pub price:       RoutePrice,
}

/// The reference table quoted by the price page and the assistant prompt.
pub const REFERENCE_ROUTES: &[Route] = &[
  Route { destination: "Joinville - Aeroporto (JOI)", price: RoutePrice::Fixed(180) },
  Route { destination: "Joinville - Cidade / Centro", price: RoutePrice::Fixed(160) },
  Route { destination: "Corupá", price: RoutePrice::Fixed(70) },
  Route { destination: "Guaramirim", price: RoutePrice::OnRequest },
  Route { destination: "Schroeder", price: RoutePrice::OnRequest },
  Route { destination: "Blumenau", price: RoutePrice::OnRequest },
  Route { destination: "Outras Cidades", price: RoutePrice::OnRequest },
];

// ─── System instruction ──────────────────────────────────────────────────────

/// Build the fixed system instruction sent with every proxy call: service
/// description, fleet policy, the reference price table, and tone guidance.
pub fn system_instruction() -> String {
  let mut prices = String::new();
  for route in REFERENCE_ROUTES {
    match route.price {
      RoutePrice::Fixed(value) => {
        let _ = writeln!(prices, "- {}: R$ {}", route.destination, value);
      }
      RoutePrice::OnRequest => {
        let _ = writeln!(prices, "- {}: Sob Consulta", route.destination);
      }
    }
  }

  format!(
    "Você é o assistente virtual da {AGENCY_NAME}, uma agência de transporte \
     de passageiros em {AGENCY_LOCATION}.\n\
     \n\
     Sua missão é explicar como funciona a agência e informar sobre descontos.\n\
     \n\
     Funcionamento da Frota:\n\
     - O cliente NÃO escolhe o carro específico no momento da reserva.\n\
     - A agência seleciona e envia o veículo disponível mais adequado.\n\
     - Todos os nossos veículos (Elétrico, Sedan ou Hatch) são de ótima \
     qualidade, rápidos e com bom preço.\n\
     - Se o cliente precisa de espaço para malas, ele deve marcar \"Sim\" na \
     opção de Porta-Malas no formulário.\n\
     \n\
     Nossa Frota (apenas informativo):\n\
     1. Carro Elétrico (BYD Dolphin Mini): Tecnológico e sustentável.\n\
     2. Carro Sedan: Ideal se precisar de mais porta-malas.\n\
     3. Carro Hatch: Prático e versátil.\n\
     \n\
     Política de Cliente Especial:\n\
     - Enfatize que aqui \"O cliente é especial\".\n\
     - Mencione que temos descontos exclusivos e promoções para viagens \
     agendadas.\n\
     \n\
     Valores de Referência (Base):\n\
     {prices}\n\
     Instruções:\n\
     - Responda de forma curta e vendedora.\n\
     - Não faça comparações de preço entre os carros (todos têm ótimo preço).\n\
     - Sempre redirecione para o formulário ou botão de WhatsApp para fechar \
     negócio."
  )
}
